//! Linear transform between view box coordinates and surface pixels.

use crate::config::ViewBox;
use crate::surface::Point;
use crate::ConfigError;

/// Maps the view box onto a `width x height` pixel surface. Pixel y grows
/// downwards, mathematical y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
  view_box: ViewBox,
  width: u32,
  height: u32,
}

impl CoordinateMapper {
  pub fn new(
    view_box: ViewBox,
    width: u32,
    height: u32,
  ) -> Result<Self, ConfigError> {
    view_box.validate()?;
    if width == 0 || height == 0 {
      return Err(ConfigError::EmptySurface { width, height });
    }
    Ok(Self {
      view_box,
      width,
      height,
    })
  }

  pub fn view_box(&self) -> ViewBox {
    self.view_box
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn to_pixel(&self, x: f64, y: f64) -> Point {
    (self.to_pixel_x(x), self.to_pixel_y(y))
  }

  // Normalizing before scaling keeps the view box corners exact.
  pub fn to_pixel_x(&self, x: f64) -> f64 {
    (x - self.view_box.min_x) / self.view_box.span_x() * self.width as f64
  }

  pub fn to_pixel_y(&self, y: f64) -> f64 {
    let height = self.height as f64;
    height - (y - self.view_box.min_y) / self.view_box.span_y() * height
  }

  /// Mathematical x of a pixel column.
  pub fn to_math_x(&self, pixel_x: f64) -> f64 {
    self.view_box.min_x + pixel_x / self.width as f64 * self.view_box.span_x()
  }

  /// Mathematical y of a pixel row.
  pub fn to_math_y(&self, pixel_y: f64) -> f64 {
    let height = self.height as f64;
    self.view_box.min_y + (height - pixel_y) / height * self.view_box.span_y()
  }
}
