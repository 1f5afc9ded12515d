use super::*;

mod curves {
  use super::*;

  fn default_mapper() -> CoordinateMapper {
    CoordinateMapper::new(ViewBox::default(), 800, 600).unwrap()
  }

  #[test]
  fn reciprocal_breaks_at_the_asymptote() {
    let segments = rasterize(&compile("1/x").unwrap(), &default_mapper());
    assert!(segments.len() >= 2);
    // Column 400 is x = 0 and is never part of a segment
    for segment in &segments {
      assert!(segment.iter().all(|(px, _)| *px != 400.0));
    }
    let left = &segments[0];
    let right = &segments[1];
    assert_eq!(left.last().map(|p| p.0), Some(399.0));
    assert_eq!(right.first().map(|p| p.0), Some(401.0));
  }

  /// Two segments, the left one ending below the surface and the right
  /// one starting above it.
  fn assert_split_at_pole(view_box: ViewBox, width: u32) {
    let mapper = CoordinateMapper::new(view_box, width, 600).unwrap();
    let segments = rasterize(&compile("1/x").unwrap(), &mapper);
    assert_eq!(segments.len(), 2, "width {width}, {view_box:?}");
    let (_, left_end) = *segments[0].last().unwrap();
    let (_, right_start) = segments[1][0];
    assert!(left_end > 600.0);
    assert!(right_start < 0.0);
  }

  #[test]
  fn reciprocal_breaks_between_columns() {
    assert_split_at_pole(ViewBox::default(), 801);
    assert_split_at_pole(ViewBox::default(), 799);
    assert_split_at_pole(ViewBox::new(-3.0, 10.0, -10.0, 10.0), 800);
  }

  #[test]
  fn shifted_pole_breaks_between_columns() {
    let mapper = CoordinateMapper::new(ViewBox::default(), 800, 600).unwrap();
    let segments = rasterize(&compile("1/(x - 0.01)").unwrap(), &mapper);
    assert_eq!(segments.len(), 2);
  }

  #[test]
  fn steep_line_is_not_split() {
    let mapper = CoordinateMapper::new(ViewBox::default(), 800, 600).unwrap();
    let segments = rasterize(&compile("1000x").unwrap(), &mapper);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 801);
  }

  #[test]
  fn polynomial_is_one_segment_over_every_column() {
    let segments =
      rasterize(&compile("x^2 - 2x - 3").unwrap(), &default_mapper());
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 801);
  }

  #[test]
  fn points_are_in_pixel_space() {
    let mapper = default_mapper();
    let segments = rasterize(&compile("x").unwrap(), &mapper);
    let (px, py) = segments[0][400];
    assert_eq!((px, py), (400.0, 300.0));
    assert_eq!(segments[0][0], (0.0, 600.0));
    assert_eq!(segments[0][800], (800.0, 0.0));
  }

  #[test]
  fn curves_are_stroked_per_segment() {
    let config = PlotConfig::default().with_function("1/x", "#e53e3e");
    let mut surface = RecordingSurface::new(800, 600);
    Plotter::new().render(&config, &mut surface).unwrap();

    let paths = surface.paths_in("#e53e3e");
    assert_eq!(paths.len(), 2);
    assert!(surface.ops.iter().any(|op| matches!(
      op,
      DrawOp::Path { color, width, .. } if color == "#e53e3e" && *width == 3.0
    )));
  }
}
