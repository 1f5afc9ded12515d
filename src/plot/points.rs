//! Labeled point markers.

use crate::config::{PointSpec, Theme};
use crate::plot::mapper::CoordinateMapper;
use crate::surface::{Surface, TextStyle};
use crate::SurfaceError;

pub const POINT_RADIUS: f64 = 6.0;
pub const POINT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_POINT_COLOR: &str = "#333";
/// Labels sit up and to the right of their marker.
pub const LABEL_OFFSET: (f64, f64) = (10.0, -10.0);

/// Draw every point in order. Later points may cover earlier ones.
pub fn draw_points<S: Surface + ?Sized>(
  surface: &mut S,
  mapper: &CoordinateMapper,
  points: &[PointSpec],
  theme: Theme,
) -> Result<(), SurfaceError> {
  let label_style = TextStyle {
    color: theme.label_ink(),
    size: POINT_FONT_SIZE,
    bold: true,
  };
  for point in points {
    let (px, py) = mapper.to_pixel(point.x, point.y);
    let color = point.color.as_deref().unwrap_or(DEFAULT_POINT_COLOR);
    surface.fill_circle((px, py), POINT_RADIUS, color)?;
    if !point.label.is_empty() {
      surface.draw_text(
        &point.label,
        (px + LABEL_OFFSET.0, py + LABEL_OFFSET.1),
        label_style,
      )?;
    }
  }
  Ok(())
}
