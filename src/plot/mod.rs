//! Plot orchestration: validate, compile, then clear → axes → curves →
//! points, in that order, on a single surface.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::compiler::{compile, CompiledExpression};
use crate::config::{PlotConfig, Theme};
use crate::surface::{PixelSurface, Stroke, Surface, SvgSurface};
use crate::{ParseError, PlotError, SurfaceError};

pub mod axis;
pub mod curve;
pub mod mapper;
pub mod points;

pub use axis::{compute_ticks, format_tick, AxisLayout, Tick};
pub use curve::{rasterize, PixelSegment};
pub use mapper::CoordinateMapper;

impl Theme {
  /// Surface background, matching the card the plot is embedded in.
  pub fn background(self) -> &'static str {
    match self {
      Theme::Light => "#f8fafc",
      Theme::Dark => "#1e293b",
    }
  }

  /// Ink of point labels.
  pub fn label_ink(self) -> &'static str {
    match self {
      Theme::Light => "#1a202c",
      Theme::Dark => "#cbd5e1",
    }
  }
}

/// Everything a draw needs, computed before the surface is touched.
struct Frame {
  mapper: CoordinateMapper,
  axes: AxisLayout,
  curves: Vec<Rc<CompiledExpression>>,
}

/// Renders plot configurations.
///
/// Compiled expressions are memoized by source text for the lifetime of
/// the plotter, so re-rendering an unchanged function skips compilation.
/// The table is never evicted on its own and grows with every distinct
/// expression; a long-lived plotter fed arbitrary input should call
/// [`Plotter::clear_cache`] now and then.
#[derive(Debug, Default)]
pub struct Plotter {
  cache: HashMap<String, Rc<CompiledExpression>>,
}

impl Plotter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Compile `source`, reusing an earlier compilation of the same text.
  pub fn compile(
    &mut self,
    source: &str,
  ) -> Result<Rc<CompiledExpression>, ParseError> {
    if let Some(compiled) = self.cache.get(source) {
      return Ok(Rc::clone(compiled));
    }
    let compiled = Rc::new(compile(source)?);
    self.cache.insert(source.to_string(), Rc::clone(&compiled));
    Ok(compiled)
  }

  /// Number of memoized expressions.
  pub fn cached(&self) -> usize {
    self.cache.len()
  }

  pub fn clear_cache(&mut self) {
    self.cache.clear();
  }

  /// Redraw `surface` from scratch with `config`.
  ///
  /// Configuration and parse errors are reported before the surface is
  /// modified.
  pub fn render<S: Surface + ?Sized>(
    &mut self,
    config: &PlotConfig,
    surface: &mut S,
  ) -> Result<(), PlotError> {
    let expected = (config.width, config.height);
    let actual = surface.dimensions();
    if expected != actual {
      return Err(SurfaceError::SizeMismatch { expected, actual }.into());
    }
    let frame = self.prepare(config)?;

    debug!(
      "drawing {} function(s), {} point(s) on {}x{}",
      config.functions.len(),
      config.points.len(),
      config.width,
      config.height
    );
    surface.clear(config.theme.background())?;
    debug!(
      "axes: {} x tick(s), {} y tick(s)",
      frame.axes.x_ticks.len(),
      frame.axes.y_ticks.len()
    );
    axis::draw_axes(surface, &frame.axes)?;

    for (index, (function, compiled)) in
      config.functions.iter().zip(&frame.curves).enumerate()
    {
      let segments = rasterize(compiled, &frame.mapper);
      debug!(
        "function {index} {:?}: {} segment(s)",
        function.expression,
        segments.len()
      );
      let stroke = Stroke {
        color: &function.color,
        width: curve::CURVE_WIDTH,
      };
      for segment in &segments {
        surface.stroke_path(segment, stroke)?;
      }
    }

    points::draw_points(surface, &frame.mapper, &config.points, config.theme)?;
    Ok(())
  }

  fn prepare(&mut self, config: &PlotConfig) -> Result<Frame, PlotError> {
    config.validate()?;
    let mapper =
      CoordinateMapper::new(config.view_box, config.width, config.height)?;
    let axes =
      AxisLayout::new(&mapper, config.label_step_x, config.label_step_y)?;

    let mut curves = Vec::with_capacity(config.functions.len());
    for (index, function) in config.functions.iter().enumerate() {
      let compiled =
        self
          .compile(&function.expression)
          .map_err(|error| PlotError::Parse {
            index,
            source_text: function.expression.clone(),
            error,
          })?;
      curves.push(compiled);
    }

    Ok(Frame {
      mapper,
      axes,
      curves,
    })
  }
}

/// Render `config` as an SVG document.
pub fn render_svg(config: &PlotConfig) -> Result<String, PlotError> {
  let mut svg = String::new();
  {
    let mut surface = SvgSurface::new(&mut svg, config.width, config.height);
    Plotter::new().render(config, &mut surface)?;
    surface.finish()?;
  }
  Ok(svg)
}

/// Render `config` onto a fresh pixel surface.
pub fn render_pixels(config: &PlotConfig) -> Result<PixelSurface, PlotError> {
  let mut surface = PixelSurface::new(config.width, config.height);
  Plotter::new().render(config, &mut surface)?;
  Ok(surface)
}
