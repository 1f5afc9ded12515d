use log::warn;
use plotters::style::RGBColor;

/// Ink used when a color string cannot be understood.
pub const FALLBACK_COLOR: RGBColor = RGBColor(0x33, 0x33, 0x33);

/// CSS color names that show up in lesson content.
fn named_color(name: &str) -> Option<RGBColor> {
  Some(match name.to_ascii_lowercase().as_str() {
    "black" => RGBColor(0, 0, 0),
    "white" => RGBColor(255, 255, 255),
    "red" => RGBColor(255, 0, 0),
    "green" => RGBColor(0, 128, 0),
    "blue" => RGBColor(0, 0, 255),
    "gray" | "grey" => RGBColor(128, 128, 128),
    "orange" => RGBColor(255, 165, 0),
    "purple" => RGBColor(128, 0, 128),
    "teal" => RGBColor(0, 128, 128),
    "magenta" | "fuchsia" => RGBColor(255, 0, 255),
    "cyan" | "aqua" => RGBColor(0, 255, 255),
    "yellow" => RGBColor(255, 255, 0),
    "brown" => RGBColor(165, 42, 42),
    "pink" => RGBColor(255, 192, 203),
    _ => return None,
  })
}

/// `#rgb`, `#rrggbb` or `#rrggbbaa` (alpha is dropped).
fn parse_hex_color(s: &str) -> Option<RGBColor> {
  let s = s.strip_prefix('#')?;
  if !s.is_ascii() {
    return None;
  }
  match s.len() {
    6 | 8 => {
      let r = u8::from_str_radix(&s[0..2], 16).ok()?;
      let g = u8::from_str_radix(&s[2..4], 16).ok()?;
      let b = u8::from_str_radix(&s[4..6], 16).ok()?;
      Some(RGBColor(r, g, b))
    }
    3 => {
      let r = u8::from_str_radix(&s[0..1], 16).ok()?;
      let g = u8::from_str_radix(&s[1..2], 16).ok()?;
      let b = u8::from_str_radix(&s[2..3], 16).ok()?;
      Some(RGBColor(r * 17, g * 17, b * 17))
    }
    _ => None,
  }
}

pub fn parse_color(spec: &str) -> Option<RGBColor> {
  let spec = spec.trim();
  parse_hex_color(spec).or_else(|| named_color(spec))
}

/// Like [`parse_color`], but never fails: unknown colors are drawn with
/// [`FALLBACK_COLOR`].
pub fn resolve_color(spec: &str) -> RGBColor {
  parse_color(spec).unwrap_or_else(|| {
    warn!("unrecognized color {spec:?}, drawing with #333");
    FALLBACK_COLOR
  })
}
