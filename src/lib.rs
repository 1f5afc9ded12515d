//! funcplot compiles single-variable algebraic expressions and renders them,
//! together with labeled points, as a Cartesian plot on a fixed-size surface.

use thiserror::Error;

pub mod compiler;
pub mod config;
pub mod plot;
pub mod surface;
pub mod syntax;

pub use compiler::{compile, CompiledExpression};
pub use config::{FunctionSpec, PlotConfig, PointSpec, Theme, ViewBox};
pub use plot::{render_pixels, render_svg, Plotter};
pub use surface::{PixelSurface, Surface, SvgSurface};

/// Errors raised while compiling an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
  #[error("invalid character '{character}' at position {position}")]
  InvalidCharacter { character: char, position: usize },
  #[error("malformed expression: {0}")]
  Malformed(String),
}

/// Which plot axis a configuration value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
  X,
  Y,
}

impl std::fmt::Display for Axis {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Axis::X => write!(f, "x"),
      Axis::Y => write!(f, "y"),
    }
  }
}

/// Invalid plot configuration, reported before anything is drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
  #[error(
    "degenerate view box [{min_x}, {max_x}] x [{min_y}, {max_y}]: each minimum must be finite and below its maximum"
  )]
  DegenerateViewBox {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
  },
  #[error("label step for the {axis} axis must be positive, got {step}")]
  NonPositiveStep { axis: Axis, step: f64 },
  #[error("{count} ticks on the {axis} axis is too many; use a larger label step")]
  TooManyTicks { axis: Axis, count: usize },
  #[error("surface must be at least 1x1 pixels, got {width}x{height}")]
  EmptySurface { width: u32, height: u32 },
  #[error("empty color for {what}")]
  EmptyColor { what: String },
  #[error("point {index} has non-finite coordinates")]
  NonFinitePoint { index: usize },
}

/// Failure reported by a drawing backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
  #[error("drawing backend error: {0}")]
  Backend(String),
  #[error("surface is {actual:?} but the plot needs {expected:?}")]
  SizeMismatch {
    expected: (u32, u32),
    actual: (u32, u32),
  },
}

#[derive(Error, Debug)]
pub enum PlotError {
  #[error("function {index} ({source_text:?}): {error}")]
  Parse {
    index: usize,
    source_text: String,
    #[source]
    error: ParseError,
  },
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error(transparent)]
  Surface(#[from] SurfaceError),
}
