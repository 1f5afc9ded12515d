//! Column-by-column sampling of a compiled function.

use crate::compiler::CompiledExpression;
use crate::plot::mapper::CoordinateMapper;
use crate::surface::Point;

pub const CURVE_WIDTH: f64 = 3.0;

/// One continuous run of a curve in pixel space.
pub type PixelSegment = Vec<Point>;

/// Halvings spent looking for a pole between two adjacent samples.
const POLE_SEARCH_STEPS: usize = 8;

/// Sample `expression` once per pixel column, `0..=width`, left to right.
///
/// Undefined samples end the current segment, so asymptotes and domain
/// boundaries never get bridged by a line. A pole that falls between two
/// columns is caught too: when neighbouring samples are more than a
/// surface height apart, the interval between them is searched for a
/// discontinuity before the two are joined.
pub fn rasterize(
  expression: &CompiledExpression,
  mapper: &CoordinateMapper,
) -> Vec<PixelSegment> {
  let height = mapper.height() as f64;
  let mut segments = Vec::new();
  let mut current = PixelSegment::new();
  // Math coordinates of the last sample in `current`
  let mut previous: Option<(f64, f64)> = None;

  for column in 0..=mapper.width() {
    let pixel_x = column as f64;
    let x = mapper.to_math_x(pixel_x);
    let Some(y) = expression.evaluate(x) else {
      if !current.is_empty() {
        segments.push(std::mem::take(&mut current));
      }
      previous = None;
      continue;
    };
    let pixel_y = mapper.to_pixel_y(y);

    let jump = current
      .last()
      .map_or(0.0, |&(_, last_pixel_y)| (pixel_y - last_pixel_y).abs());
    if let Some(last) = previous {
      if jump > height && is_discontinuous(expression, last, (x, y)) {
        segments.push(std::mem::take(&mut current));
      }
    }
    current.push((pixel_x, pixel_y));
    previous = Some((x, y));
  }
  if !current.is_empty() {
    segments.push(current);
  }
  segments
}

/// Bisect towards the steepest part of `(left, right)`. The function is
/// discontinuous there if some probe is undefined or leaves the value
/// range of the interval it splits.
fn is_discontinuous(
  expression: &CompiledExpression,
  mut left: (f64, f64),
  mut right: (f64, f64),
) -> bool {
  for _ in 0..POLE_SEARCH_STEPS {
    let mid_x = (left.0 + right.0) / 2.0;
    let Some(mid_y) = expression.evaluate(mid_x) else {
      return true;
    };
    let low = left.1.min(right.1);
    let high = left.1.max(right.1);
    if mid_y < low || mid_y > high {
      return true;
    }
    if (mid_y - left.1).abs() >= (right.1 - mid_y).abs() {
      right = (mid_x, mid_y);
    } else {
      left = (mid_x, mid_y);
    }
  }
  false
}
