//! Stroke colors parsed from caller-supplied color strings.
//!
//! Accepts `#rrggbb`, shorthand `#rgb`, and the handful of CSS color
//! names the demo UIs tend to pass through.

use std::str::FromStr;
use thiserror::Error;

/// 8-bit RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Error, Debug)]
pub enum ColorParseError {
    #[error("unknown color name {0:?}")]
    Unknown(String),
    #[error("bad hex color {0:?}: expected #rgb or #rrggbb")]
    BadHex(String),
}

impl Color {
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::BadHex(s.to_string()));
        }
        // CSS names: "green" is the dark half-intensity green, "lime" the
        // full-intensity one.
        match lower.as_str() {
            "red" => Ok(Color::RED),
            "lime" => Ok(Color::GREEN),
            "green" => Ok(Color::rgb(0x00, 0x80, 0x00)),
            "blue" => Ok(Color::rgb(0x00, 0x00, 0xff)),
            "yellow" => Ok(Color::rgb(0xff, 0xff, 0x00)),
            "cyan" => Ok(Color::rgb(0x00, 0xff, 0xff)),
            "magenta" => Ok(Color::rgb(0xff, 0x00, 0xff)),
            "white" => Ok(Color::rgb(0xff, 0xff, 0xff)),
            "black" => Ok(Color::rgb(0x00, 0x00, 0x00)),
            _ => Err(ColorParseError::Unknown(s.to_string())),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    // from_str_radix accepts a leading sign; a color is bare hex digits only
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
        }
        // #rgb expands each nibble: #f00 is #ff0000
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            let r = ((v >> 8) & 0xf) as u8;
            let g = ((v >> 4) & 0xf) as u8;
            let b = (v & 0xf) as u8;
            Some(Color::rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
