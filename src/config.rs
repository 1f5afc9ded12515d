//! Plot configuration: what to draw and on how large a surface.
//!
//! Field names in JSON follow the lesson props the plots are embedded
//! with (`viewBox`, `functions[].func`, `labelStepX`, ...).

use serde::{Deserialize, Serialize};

use crate::{Axis, ConfigError};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_LABEL_STEP: f64 = 1.0;

/// Mathematical region shown on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ViewBox {
  pub min_x: f64,
  pub max_x: f64,
  pub min_y: f64,
  pub max_y: f64,
}

impl ViewBox {
  pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
    Self {
      min_x,
      max_x,
      min_y,
      max_y,
    }
  }

  pub fn span_x(&self) -> f64 {
    self.max_x - self.min_x
  }

  pub fn span_y(&self) -> f64 {
    self.max_y - self.min_y
  }

  /// Both ranges are finite, strictly increasing and have a finite span.
  pub fn is_valid(&self) -> bool {
    [self.min_x, self.max_x, self.min_y, self.max_y]
      .iter()
      .all(|v| v.is_finite())
      && self.min_x < self.max_x
      && self.min_y < self.max_y
      && self.span_x().is_finite()
      && self.span_y().is_finite()
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.is_valid() {
      Ok(())
    } else {
      Err(ConfigError::DegenerateViewBox {
        min_x: self.min_x,
        max_x: self.max_x,
        min_y: self.min_y,
        max_y: self.max_y,
      })
    }
  }
}

impl Default for ViewBox {
  fn default() -> Self {
    Self::new(-10.0, 10.0, -10.0, 10.0)
  }
}

impl From<[f64; 4]> for ViewBox {
  fn from([min_x, max_x, min_y, max_y]: [f64; 4]) -> Self {
    Self::new(min_x, max_x, min_y, max_y)
  }
}

impl From<ViewBox> for [f64; 4] {
  fn from(view_box: ViewBox) -> Self {
    [view_box.min_x, view_box.max_x, view_box.min_y, view_box.max_y]
  }
}

/// One function curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
  #[serde(rename = "func")]
  pub expression: String,
  pub color: String,
}

impl FunctionSpec {
  pub fn new(expression: impl Into<String>, color: impl Into<String>) -> Self {
    Self {
      expression: expression.into(),
      color: color.into(),
    }
  }
}

/// One labeled point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSpec {
  pub x: f64,
  pub y: f64,
  #[serde(default)]
  pub label: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
}

impl PointSpec {
  pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
    Self {
      x,
      y,
      label: label.into(),
      color: None,
    }
  }

  pub fn with_color(mut self, color: impl Into<String>) -> Self {
    self.color = Some(color.into());
    self
  }
}

/// Page theme; only the ink of point labels depends on it.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

/// Everything needed for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotConfig {
  pub view_box: ViewBox,
  pub functions: Vec<FunctionSpec>,
  pub points: Vec<PointSpec>,
  pub label_step_x: f64,
  pub label_step_y: f64,
  pub width: u32,
  pub height: u32,
  pub theme: Theme,
}

impl Default for PlotConfig {
  fn default() -> Self {
    Self {
      view_box: ViewBox::default(),
      functions: Vec::new(),
      points: Vec::new(),
      label_step_x: DEFAULT_LABEL_STEP,
      label_step_y: DEFAULT_LABEL_STEP,
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
      theme: Theme::default(),
    }
  }
}

impl PlotConfig {
  pub fn new(view_box: ViewBox) -> Self {
    Self {
      view_box,
      ..Self::default()
    }
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  pub fn with_function(
    mut self,
    expression: impl Into<String>,
    color: impl Into<String>,
  ) -> Self {
    self.functions.push(FunctionSpec::new(expression, color));
    self
  }

  pub fn with_point(mut self, point: PointSpec) -> Self {
    self.points.push(point);
    self
  }

  pub fn with_label_steps(mut self, step_x: f64, step_y: f64) -> Self {
    self.label_step_x = step_x;
    self.label_step_y = step_y;
    self
  }

  pub fn with_size(mut self, width: u32, height: u32) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn with_theme(mut self, theme: Theme) -> Self {
    self.theme = theme;
    self
  }

  /// Check every field that can make a render fail or draw garbage.
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.view_box.validate()?;
    validate_step(Axis::X, self.label_step_x)?;
    validate_step(Axis::Y, self.label_step_y)?;
    if self.width == 0 || self.height == 0 {
      return Err(ConfigError::EmptySurface {
        width: self.width,
        height: self.height,
      });
    }
    for (index, function) in self.functions.iter().enumerate() {
      if function.color.trim().is_empty() {
        return Err(ConfigError::EmptyColor {
          what: format!("function {index}"),
        });
      }
    }
    for (index, point) in self.points.iter().enumerate() {
      if !point.x.is_finite() || !point.y.is_finite() {
        return Err(ConfigError::NonFinitePoint { index });
      }
      if point.color.as_deref().is_some_and(|c| c.trim().is_empty()) {
        return Err(ConfigError::EmptyColor {
          what: format!("point {index}"),
        });
      }
    }
    Ok(())
  }
}

pub(crate) fn validate_step(axis: Axis, step: f64) -> Result<(), ConfigError> {
  if step.is_finite() && step > 0.0 {
    Ok(())
  } else {
    Err(ConfigError::NonPositiveStep { axis, step })
  }
}
