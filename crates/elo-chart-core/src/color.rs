// File: crates/elo-chart-core/src/color.rs
// Summary: Backend-neutral RGBA colour with hex (de)serialisation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 8-bit straight-alpha colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// CSS/matplotlib "green".
    pub const GREEN: Rgba = Rgba::rgb(0, 128, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear blend; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ChartError::InvalidColor(s.to_string());
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgba::from_hex(&s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> String {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_alpha() {
        assert_eq!(Rgba::from_hex("#1f77b4").unwrap(), Rgba::rgb(0x1f, 0x77, 0xb4));
        assert_eq!(Rgba::from_hex("ff7f0e80").unwrap(), Rgba::new(0xff, 0x7f, 0x0e, 0x80));
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn display_round_trips_through_parser() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(Rgba::from_hex(&c.to_string()).unwrap(), c);
        assert_eq!(Rgba::GREEN.to_string(), "#008000");
    }

    #[test]
    fn lerp_clamps_parameter() {
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, 2.0), Rgba::WHITE);
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, -1.0), Rgba::BLACK);
    }
}
