//! Axis lines, tick marks and tick labels.

use crate::config::validate_step;
use crate::plot::mapper::CoordinateMapper;
use crate::surface::{Stroke, Surface, TextStyle};
use crate::{Axis, ConfigError, SurfaceError};

pub const AXIS_COLOR: &str = "#a0aec0";
pub const AXIS_LABEL_COLOR: &str = "#718096";
pub const AXIS_WIDTH: f64 = 1.5;
pub const AXIS_FONT_SIZE: f64 = 14.0;
pub const TICK_HALF_LENGTH: f64 = 4.0;
/// Upper bound on ticks per axis; more would be unreadable anyway.
pub const MAX_TICKS: usize = 10_000;
/// Rounding slack, in ulps, when deciding whether a range end is a tick.
const TICK_ULPS: f64 = 64.0;

/// Tick labels on the x axis sit below the axis, slightly left of the mark.
const X_LABEL_OFFSET: (f64, f64) = (-5.0, 20.0);
/// Tick labels on the y axis sit right of the axis.
const Y_LABEL_OFFSET: (f64, f64) = (10.0, 5.0);

/// A tick value and its pixel position along its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
  pub value: f64,
  pub position: f64,
}

/// Multiples of `step` in `[min, max]`, ascending, without zero.
///
/// Values are `index * step`, so zero is skipped exactly and long ranges
/// do not accumulate rounding drift. The bounds are widened by a few ulps
/// of `bound / step` only, which keeps `-0.3 / 0.1` at index -3 without
/// admitting ticks that lie measurably outside the range.
pub fn compute_ticks(
  axis: Axis,
  min: f64,
  max: f64,
  step: f64,
) -> Result<Vec<f64>, ConfigError> {
  validate_step(axis, step)?;
  let first = widen(min / step, -1.0).ceil();
  let last = widen(max / step, 1.0).floor();
  if !first.is_finite() || !last.is_finite() {
    return Err(ConfigError::TooManyTicks {
      axis,
      count: usize::MAX,
    });
  }
  if last < first {
    return Ok(Vec::new());
  }
  // Compare in f64: the span of a huge range does not fit a usize
  let span = last - first;
  if span >= MAX_TICKS as f64 {
    return Err(ConfigError::TooManyTicks {
      axis,
      count: (span + 1.0) as usize,
    });
  }
  let count = span as usize + 1;

  let mut ticks = Vec::with_capacity(count);
  for i in 0..count {
    let index = first + i as f64;
    if index != 0.0 {
      ticks.push(index * step);
    }
  }
  Ok(ticks)
}

/// Move `quotient` by a few ulps in `direction`.
fn widen(quotient: f64, direction: f64) -> f64 {
  quotient + direction * TICK_ULPS * f64::EPSILON * quotient.abs().max(1.0)
}

/// Tick label text: integers without a fraction, everything else with
/// trailing zeros trimmed.
pub fn format_tick(value: f64) -> String {
  if (value - value.round()).abs() < 1e-9 {
    format!("{}", value.round() as i64)
  } else {
    let text = format!("{value:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
  }
}

/// Precomputed tick positions for both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
  /// Pixel position of the mathematical origin; may lie off the surface.
  pub origin: (f64, f64),
  pub x_ticks: Vec<Tick>,
  pub y_ticks: Vec<Tick>,
}

impl AxisLayout {
  pub fn new(
    mapper: &CoordinateMapper,
    step_x: f64,
    step_y: f64,
  ) -> Result<Self, ConfigError> {
    let view_box = mapper.view_box();
    let x_ticks =
      compute_ticks(Axis::X, view_box.min_x, view_box.max_x, step_x)?
        .into_iter()
        .map(|value| Tick {
          value,
          position: mapper.to_pixel_x(value),
        })
        .collect();
    let y_ticks =
      compute_ticks(Axis::Y, view_box.min_y, view_box.max_y, step_y)?
        .into_iter()
        .map(|value| Tick {
          value,
          position: mapper.to_pixel_y(value),
        })
        .collect();
    Ok(Self {
      origin: mapper.to_pixel(0.0, 0.0),
      x_ticks,
      y_ticks,
    })
  }
}

pub fn draw_axes<S: Surface + ?Sized>(
  surface: &mut S,
  layout: &AxisLayout,
) -> Result<(), SurfaceError> {
  let (width, height) = surface.dimensions();
  let (origin_x, origin_y) = layout.origin;
  let stroke = Stroke {
    color: AXIS_COLOR,
    width: AXIS_WIDTH,
  };
  let label_style = TextStyle {
    color: AXIS_LABEL_COLOR,
    size: AXIS_FONT_SIZE,
    bold: false,
  };

  surface.stroke_path(&[(0.0, origin_y), (width as f64, origin_y)], stroke)?;
  surface.stroke_path(&[(origin_x, 0.0), (origin_x, height as f64)], stroke)?;

  for tick in &layout.x_ticks {
    surface.draw_text(
      &format_tick(tick.value),
      (tick.position + X_LABEL_OFFSET.0, origin_y + X_LABEL_OFFSET.1),
      label_style,
    )?;
    surface.stroke_path(
      &[
        (tick.position, origin_y - TICK_HALF_LENGTH),
        (tick.position, origin_y + TICK_HALF_LENGTH),
      ],
      stroke,
    )?;
  }

  for tick in &layout.y_ticks {
    surface.draw_text(
      &format_tick(tick.value),
      (origin_x + Y_LABEL_OFFSET.0, tick.position + Y_LABEL_OFFSET.1),
      label_style,
    )?;
    surface.stroke_path(
      &[
        (origin_x - TICK_HALF_LENGTH, tick.position),
        (origin_x + TICK_HALF_LENGTH, tick.position),
      ],
      stroke,
    )?;
  }
  Ok(())
}
