use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{
  backend_error, circle_on_area, fill_area, stroke_on_area, Point, Stroke,
  Surface, TextStyle,
};
use crate::SurfaceError;

/// A label that was placed on a [`PixelSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
  pub text: String,
  pub position: Point,
  pub color: String,
  pub size: f64,
  pub bold: bool,
}

/// Fixed-size RGB raster.
///
/// Lines and markers are rasterized into the buffer. The crate ships no
/// font engine, so labels are kept as [`TextRun`]s for the host to
/// overlay with its own text stack.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
  width: u32,
  height: u32,
  pixels: Vec<u8>,
  text_runs: Vec<TextRun>,
}

impl PixelSurface {
  /// A white surface of the given size.
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      pixels: vec![255; width as usize * height as usize * 3],
      text_runs: Vec::new(),
    }
  }

  /// Row-major RGB8 bytes.
  pub fn pixels(&self) -> &[u8] {
    &self.pixels
  }

  pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
    if x >= self.width || y >= self.height {
      return None;
    }
    let offset = (y as usize * self.width as usize + x as usize) * 3;
    Some([
      self.pixels[offset],
      self.pixels[offset + 1],
      self.pixels[offset + 2],
    ])
  }

  pub fn text_runs(&self) -> &[TextRun] {
    &self.text_runs
  }

  pub fn into_image(self) -> Option<image::RgbImage> {
    image::RgbImage::from_raw(self.width, self.height, self.pixels)
  }

  /// Encode the raster as PNG. Text runs are not part of the image.
  pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    image::save_buffer(
      path,
      &self.pixels,
      self.width,
      self.height,
      image::ColorType::Rgb8,
    )
  }

  /// Run `draw` with a bitmap backend borrowing the pixel buffer. The
  /// backend only lives for the duration of the call.
  fn with_area<F>(&mut self, draw: F) -> Result<(), SurfaceError>
  where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), SurfaceError>,
  {
    if self.width == 0 || self.height == 0 {
      return Ok(());
    }
    let area = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
      .into_drawing_area();
    draw(&area)?;
    area.present().map_err(backend_error)
  }
}

impl Surface for PixelSurface {
  fn dimensions(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  fn clear(&mut self, background: &str) -> Result<(), SurfaceError> {
    self.text_runs.clear();
    self.with_area(|area| fill_area(area, background))
  }

  fn stroke_path(
    &mut self,
    points: &[Point],
    stroke: Stroke<'_>,
  ) -> Result<(), SurfaceError> {
    self.with_area(|area| stroke_on_area(area, points, stroke))
  }

  fn fill_circle(
    &mut self,
    center: Point,
    radius: f64,
    color: &str,
  ) -> Result<(), SurfaceError> {
    self.with_area(|area| circle_on_area(area, center, radius, color))
  }

  fn draw_text(
    &mut self,
    text: &str,
    position: Point,
    style: TextStyle<'_>,
  ) -> Result<(), SurfaceError> {
    self.text_runs.push(TextRun {
      text: text.to_string(),
      position,
      color: style.color.to_string(),
      size: style.size,
      bold: style.bold,
    });
    Ok(())
  }
}
