use super::*;

mod render {
  use super::*;

  fn lesson_config() -> PlotConfig {
    PlotConfig::default()
      .with_function("x^2 - 2x - 3", "#e53e3e")
      .with_function("1/x", "#3182ce")
      .with_point(PointSpec::new(3.0, 0.0, "N1"))
      .with_point(PointSpec::new(-1.0, 0.0, "N2").with_color("#38a169"))
  }

  mod sequence {
    use super::*;

    #[test]
    fn clear_axes_curves_points() {
      let config = lesson_config();
      let mut surface = RecordingSurface::new(800, 600);
      Plotter::new().render(&config, &mut surface).unwrap();

      assert_eq!(surface.ops[0], DrawOp::Clear("#f8fafc".to_string()));
      assert!(
        matches!(&surface.ops[1], DrawOp::Path { color, .. } if color == "#a0aec0")
      );

      let first_red = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Path { color, .. } if color == "#e53e3e"))
        .unwrap();
      let first_blue = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Path { color, .. } if color == "#3182ce"))
        .unwrap();
      let last_axis = surface
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Path { color, .. } if color == "#a0aec0"))
        .unwrap();
      let first_circle = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Circle { .. }))
        .unwrap();
      assert!(last_axis < first_red);
      assert!(first_red < first_blue);
      assert!(first_blue < first_circle);
    }

    #[test]
    fn dark_theme_background() {
      let config = PlotConfig::default().with_theme(Theme::Dark);
      let mut surface = RecordingSurface::new(800, 600);
      Plotter::new().render(&config, &mut surface).unwrap();
      assert_eq!(surface.ops[0], DrawOp::Clear("#1e293b".to_string()));
    }
  }

  mod rejection {
    use super::*;

    #[test]
    fn degenerate_view_box_leaves_surface_untouched() {
      let config = PlotConfig::new(ViewBox::new(1.0, 1.0, -5.0, 5.0))
        .with_function("x", "#000");
      let mut surface = RecordingSurface::new(800, 600);
      let err = Plotter::new().render(&config, &mut surface).unwrap_err();
      assert!(matches!(
        err,
        PlotError::Config(ConfigError::DegenerateViewBox { .. })
      ));
      assert!(surface.ops.is_empty());
    }

    #[test]
    fn non_positive_step_leaves_pixels_untouched() {
      let config = lesson_config().with_label_steps(0.0, 1.0);
      let fresh = funcplot::PixelSurface::new(800, 600);
      let mut surface = fresh.clone();
      let err = Plotter::new().render(&config, &mut surface).unwrap_err();
      assert!(matches!(
        err,
        PlotError::Config(ConfigError::NonPositiveStep { axis: Axis::X, .. })
      ));
      assert_eq!(surface, fresh);
    }

    #[test]
    fn parse_error_names_the_function() {
      let config = PlotConfig::default()
        .with_function("x", "#000")
        .with_function("3 & 2", "#000");
      let mut surface = RecordingSurface::new(800, 600);
      match Plotter::new().render(&config, &mut surface) {
        Err(PlotError::Parse {
          index, source_text, ..
        }) => {
          assert_eq!(index, 1);
          assert_eq!(source_text, "3 & 2");
        }
        other => panic!("expected a parse error, got {other:?}"),
      }
      assert!(surface.ops.is_empty());
    }

    #[test]
    fn surface_size_must_match() {
      let mut surface = RecordingSurface::new(100, 100);
      let err = Plotter::new()
        .render(&PlotConfig::default(), &mut surface)
        .unwrap_err();
      assert!(matches!(
        err,
        PlotError::Surface(SurfaceError::SizeMismatch { .. })
      ));
      assert!(surface.ops.is_empty());
    }

    #[test]
    fn render_svg_reports_config_errors() {
      let config = PlotConfig::default().with_size(0, 600);
      assert!(matches!(
        render_svg(&config),
        Err(PlotError::Config(ConfigError::EmptySurface { .. }))
      ));
    }
  }

  mod output {
    use super::*;

    #[test]
    fn svg_is_deterministic() {
      let config = lesson_config();
      assert_eq!(render_svg(&config).unwrap(), render_svg(&config).unwrap());
    }

    #[test]
    fn pixels_are_deterministic() {
      let config = lesson_config();
      let first = render_pixels(&config).unwrap();
      let second = render_pixels(&config).unwrap();
      assert_eq!(first.pixels(), second.pixels());
      assert_eq!(first.text_runs(), second.text_runs());
    }

    #[test]
    fn rerender_is_a_full_redraw() {
      let mut plotter = Plotter::new();
      let mut reused = funcplot::PixelSurface::new(800, 600);
      plotter.render(&lesson_config(), &mut reused).unwrap();

      let second = PlotConfig::default().with_function("-x", "#805ad5");
      plotter.render(&second, &mut reused).unwrap();
      assert_eq!(reused, render_pixels(&second).unwrap());
    }

    #[test]
    fn svg_contains_curves_and_labels() {
      let svg = render_svg(&lesson_config()).unwrap();
      assert!(svg.contains("<svg"));
      assert!(svg.contains("width=\"800\""));
      assert!(svg.to_uppercase().contains("#E53E3E"));
      assert!(svg.contains(">N1"));
      assert!(svg.contains(">-10"));
    }

    #[test]
    fn curve_is_rasterized() {
      let config = PlotConfig::default().with_function("x", "#ff0000");
      let surface = render_pixels(&config).unwrap();
      // y = x passes through (5, 5), i.e. column 600, row 150
      let [r, g, b] = surface.pixel(600, 150).unwrap();
      assert!(r > 200 && g < 80 && b < 80, "got {r},{g},{b}");
      // Far from the curve and the axes only the background remains
      assert_eq!(surface.pixel(100, 500), Some([0xf8, 0xfa, 0xfc]));
    }

    #[test]
    fn pixel_labels_are_kept_as_text_runs() {
      let config =
        PlotConfig::default().with_point(PointSpec::new(0.0, 0.0, "O"));
      let surface = render_pixels(&config).unwrap();
      let run = surface
        .text_runs()
        .iter()
        .find(|run| run.text == "O")
        .unwrap();
      assert_eq!(run.position, (410.0, 290.0));
      assert!(run.bold);
    }

    #[test]
    fn json_config_renders() {
      let config = PlotConfig::from_json(
        r##"{
          "viewBox": [-5, 5, -5, 5],
          "functions": [{ "func": "0.5x + 1", "color": "#dd6b20" }],
          "points": [{ "x": -2, "y": 0, "label": "S" }],
          "width": 300,
          "height": 300
        }"##,
      )
      .unwrap();
      let surface = render_pixels(&config).unwrap();
      assert_eq!(surface.pixels().len(), 300 * 300 * 3);
    }
  }

  mod cache {
    use super::*;

    #[test]
    fn compiled_expressions_are_reused() {
      let mut plotter = Plotter::new();
      let first = plotter.compile("x^2").unwrap();
      let second = plotter.compile("x^2").unwrap();
      assert!(std::rc::Rc::ptr_eq(&first, &second));
      assert_eq!(plotter.cached(), 1);
    }

    #[test]
    fn rendering_fills_and_clearing_empties_the_cache() {
      let mut plotter = Plotter::new();
      let mut surface = RecordingSurface::new(800, 600);
      plotter.render(&lesson_config(), &mut surface).unwrap();
      plotter.render(&lesson_config(), &mut surface).unwrap();
      assert_eq!(plotter.cached(), 2);
      plotter.clear_cache();
      assert_eq!(plotter.cached(), 0);
    }

    #[test]
    fn failed_compilations_are_not_cached() {
      let mut plotter = Plotter::new();
      assert!(plotter.compile("x +").is_err());
      assert_eq!(plotter.cached(), 0);
    }
  }
}
