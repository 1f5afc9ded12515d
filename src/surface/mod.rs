//! Drawing surfaces.
//!
//! A [`Surface`] is the only thing the plotter draws on. Coordinates are in
//! pixels with the origin at the top-left corner; colors are the opaque
//! strings from the plot configuration and are resolved by each surface.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::SurfaceError;

pub mod color;
mod pixels;
mod svg;

pub use pixels::{PixelSurface, TextRun};
pub use svg::SvgSurface;

/// Pixel-space position.
pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke<'a> {
  pub color: &'a str,
  pub width: f64,
}

/// Style of a text label. The position passed with it is the left end of
/// the text baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
  pub color: &'a str,
  pub size: f64,
  pub bold: bool,
}

pub trait Surface {
  /// Width and height in pixels.
  fn dimensions(&self) -> (u32, u32);

  /// Paint the whole surface with `background`, covering previous content.
  fn clear(&mut self, background: &str) -> Result<(), SurfaceError>;

  /// Stroke an open polyline. A single point is drawn as a dot.
  fn stroke_path(
    &mut self,
    points: &[Point],
    stroke: Stroke<'_>,
  ) -> Result<(), SurfaceError>;

  fn fill_circle(
    &mut self,
    center: Point,
    radius: f64,
    color: &str,
  ) -> Result<(), SurfaceError>;

  fn draw_text(
    &mut self,
    text: &str,
    position: Point,
    style: TextStyle<'_>,
  ) -> Result<(), SurfaceError>;
}

pub(crate) fn backend_error(e: impl std::fmt::Display) -> SurfaceError {
  SurfaceError::Backend(e.to_string())
}

/// Round to a backend coordinate. Samples of steep curves can land far
/// outside the surface; they are pulled in to a few surface sizes away so
/// backends never see coordinates near the `i32` limits.
fn to_backend_coord(point: Point, (width, height): (u32, u32)) -> (i32, i32) {
  let limit_x = 4.0 * width.max(1) as f64;
  let limit_y = 4.0 * height.max(1) as f64;
  (
    point.0.clamp(-limit_x, width as f64 + limit_x).round() as i32,
    point.1.clamp(-limit_y, height as f64 + limit_y).round() as i32,
  )
}

// Shared plotters drawing code for the SVG and bitmap surfaces.

fn fill_area<DB: DrawingBackend>(
  area: &DrawingArea<DB, Shift>,
  background: &str,
) -> Result<(), SurfaceError> {
  area
    .fill(&color::resolve_color(background))
    .map_err(backend_error)
}

fn stroke_on_area<DB: DrawingBackend>(
  area: &DrawingArea<DB, Shift>,
  points: &[Point],
  stroke: Stroke<'_>,
) -> Result<(), SurfaceError> {
  let size = area.dim_in_pixel();
  let rgb = color::resolve_color(stroke.color);
  match points {
    [] => Ok(()),
    [single] => {
      let radius = (stroke.width / 2.0).round().max(1.0) as i32;
      area
        .draw(&Circle::new(
          to_backend_coord(*single, size),
          radius,
          rgb.filled(),
        ))
        .map_err(backend_error)
    }
    _ => {
      let coords = points
        .iter()
        .map(|p| to_backend_coord(*p, size))
        .collect::<Vec<_>>();
      let width = stroke.width.round().max(1.0) as u32;
      area
        .draw(&PathElement::new(coords, rgb.stroke_width(width)))
        .map_err(backend_error)
    }
  }
}

fn circle_on_area<DB: DrawingBackend>(
  area: &DrawingArea<DB, Shift>,
  center: Point,
  radius: f64,
  color: &str,
) -> Result<(), SurfaceError> {
  let size = area.dim_in_pixel();
  area
    .draw(&Circle::new(
      to_backend_coord(center, size),
      radius.round().max(1.0) as i32,
      color::resolve_color(color).filled(),
    ))
    .map_err(backend_error)
}

fn text_on_area<DB: DrawingBackend>(
  area: &DrawingArea<DB, Shift>,
  text: &str,
  position: Point,
  style: TextStyle<'_>,
) -> Result<(), SurfaceError> {
  let size = area.dim_in_pixel();
  let font_style = if style.bold {
    FontStyle::Bold
  } else {
    FontStyle::Normal
  };
  let text_style = ("sans-serif", style.size)
    .into_font()
    .style(font_style)
    .color(&color::resolve_color(style.color))
    .pos(Pos::new(HPos::Left, VPos::Bottom));
  area
    .draw_text(text, &text_style, to_backend_coord(position, size))
    .map_err(backend_error)
}
