use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use funcplot::{compile, render_pixels, render_svg, PlotConfig, Theme};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Render a JSON plot configuration to an SVG or PNG file
  Render {
    /// Path to the plot configuration (JSON)
    config: PathBuf,
    /// Output file; the extension selects the format (.svg or .png)
    #[arg(short, long)]
    output: PathBuf,
    /// Override the surface width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Override the surface height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Override the page theme
    #[arg(long, value_enum)]
    theme: Option<Theme>,
  },
  /// Evaluate an expression in x
  Eval {
    /// The expression, e.g. "x^2 - 2x - 3"
    expression: String,
    /// Values of x to evaluate at (repeatable)
    #[arg(long = "at", allow_negative_numbers = true)]
    at: Vec<f64>,
    /// Print the parsed, fully parenthesized form
    #[arg(long)]
    tree: bool,
  },
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  match cli.command {
    Commands::Render {
      config,
      output,
      width,
      height,
      theme,
    } => {
      let json = fs::read_to_string(&config)
        .with_context(|| format!("failed to read {}", config.display()))?;
      let mut plot = PlotConfig::from_json(&json)
        .with_context(|| format!("invalid plot configuration in {}", config.display()))?;
      if let Some(width) = width {
        plot.width = width;
      }
      if let Some(height) = height {
        plot.height = height;
      }
      if let Some(theme) = theme {
        plot.theme = theme;
      }
      render_to_file(&plot, &output)?;
      info!("wrote {}", output.display());
    }
    Commands::Eval {
      expression,
      at,
      tree,
    } => {
      let compiled = compile(&expression)
        .with_context(|| format!("cannot compile {expression:?}"))?;
      if tree {
        println!("{compiled}");
      }
      let samples = if at.is_empty() { vec![0.0] } else { at };
      for x in samples {
        match compiled.evaluate(x) {
          Some(y) => println!("f({x}) = {y}"),
          None => println!("f({x}) = undefined"),
        }
      }
    }
  }
  Ok(())
}

fn render_to_file(plot: &PlotConfig, output: &Path) -> Result<()> {
  let extension = output
    .extension()
    .and_then(|e| e.to_str())
    .map(|e| e.to_ascii_lowercase());
  match extension.as_deref() {
    Some("svg") => {
      let svg = render_svg(plot)?;
      fs::write(output, svg)
        .with_context(|| format!("failed to write {}", output.display()))?;
    }
    Some("png") => {
      let surface = render_pixels(plot)?;
      surface
        .save_png(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
      if !surface.text_runs().is_empty() {
        info!(
          "{} text label(s) are not rasterized in PNG output; use .svg to include them",
          surface.text_runs().len()
        );
      }
    }
    _ => bail!(
      "unsupported output format for {}; use .svg or .png",
      output.display()
    ),
  }
  Ok(())
}
