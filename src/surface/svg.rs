use plotters::coord::Shift;
use plotters::prelude::*;

use super::{
  backend_error, circle_on_area, fill_area, stroke_on_area, text_on_area, Point,
  Stroke, Surface, TextStyle,
};
use crate::SurfaceError;

/// Surface that writes SVG markup into a caller-owned string.
pub struct SvgSurface<'a> {
  area: DrawingArea<SVGBackend<'a>, Shift>,
  width: u32,
  height: u32,
}

impl<'a> SvgSurface<'a> {
  pub fn new(buf: &'a mut String, width: u32, height: u32) -> Self {
    let area = SVGBackend::with_string(buf, (width, height)).into_drawing_area();
    Self {
      area,
      width,
      height,
    }
  }

  /// Flush the document into the string.
  pub fn finish(self) -> Result<(), SurfaceError> {
    self.area.present().map_err(backend_error)
  }
}

impl Surface for SvgSurface<'_> {
  fn dimensions(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  fn clear(&mut self, background: &str) -> Result<(), SurfaceError> {
    fill_area(&self.area, background)
  }

  fn stroke_path(
    &mut self,
    points: &[Point],
    stroke: Stroke<'_>,
  ) -> Result<(), SurfaceError> {
    stroke_on_area(&self.area, points, stroke)
  }

  fn fill_circle(
    &mut self,
    center: Point,
    radius: f64,
    color: &str,
  ) -> Result<(), SurfaceError> {
    circle_on_area(&self.area, center, radius, color)
  }

  fn draw_text(
    &mut self,
    text: &str,
    position: Point,
    style: TextStyle<'_>,
  ) -> Result<(), SurfaceError> {
    text_on_area(&self.area, text, position, style)
  }
}
