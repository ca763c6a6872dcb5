use std::fmt;
use std::str::FromStr;

use palette::{Gradient, LinSrgb, Srgb};

use crate::{Error, Result};

// 24-bit sRGB color written as "rrggbb" (a leading '#' is accepted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn to_linear(self) -> LinSrgb {
        Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_linear()
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Parse a list of color strings, failing on the first bad one
pub fn parse_colors(colors: &[String]) -> Result<Vec<HexColor>> {
    colors.iter().map(|c| c.parse()).collect()
}

// Offset of stop `index` in [0, 1]: index / max(len - 1, 1)
pub fn stop_offset(index: usize, len: usize) -> f64 {
    let last_index = if len > 1 { len - 1 } else { 1 };
    index as f64 / last_index as f64
}

// Vertical color ramp with evenly spaced stops.
// A single color fills the whole span.
pub enum ColorRamp {
    Solid(HexColor),
    Stops(Gradient<LinSrgb>),
}

impl ColorRamp {
    pub fn new(colors: &[HexColor]) -> Option<Self> {
        match colors {
            [] => None,
            [only] => Some(Self::Solid(*only)),
            _ => {
                let stops = colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (stop_offset(i, colors.len()) as f32, c.to_linear()))
                    .collect();
                Some(Self::Stops(Gradient::with_domain(stops)))
            }
        }
    }

    // Color at position t in [0, 1]; values outside clamp to the end stops
    pub fn at(&self, t: f32) -> [u8; 3] {
        match self {
            Self::Solid(c) => c.to_rgb(),
            Self::Stops(gradient) => {
                let col: LinSrgb = gradient.get(t.clamp(0.0, 1.0));
                let rgb = Srgb::from_linear(col).into_format::<u8>();
                [rgb.red, rgb.green, rgb.blue]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parse_with_and_without_hash() {
        let a: HexColor = "a0d5ff".parse().unwrap();
        let b: HexColor = "#A0D5FF".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rgb(), [0xa0, 0xd5, 0xff]);
        assert_eq!(a.to_string(), "a0d5ff");
    }

    #[test]
    fn color_parse_rejects_garbage() {
        for bad in ["", "#fff", "12345g", "1234567", "+12345"] {
            assert!(matches!(bad.parse::<HexColor>(), Err(Error::InvalidColor(_))), "{}", bad);
        }
    }

    #[test]
    fn stop_offsets() {
        assert_eq!(stop_offset(0, 1), 0.0);
        assert_eq!(stop_offset(1, 2), 1.0);
        assert_eq!(stop_offset(1, 3), 0.5);
    }

    #[test]
    fn ramp_endpoints() {
        let colors = parse_colors(&["000000".into(), "ffffff".into()]).unwrap();
        let ramp = ColorRamp::new(&colors).unwrap();
        assert_eq!(ramp.at(0.0), [0, 0, 0]);
        assert_eq!(ramp.at(1.0), [255, 255, 255]);
        assert_eq!(ramp.at(-5.0), [0, 0, 0]);
    }

    #[test]
    fn ramp_single_color_is_solid() {
        let colors = parse_colors(&["498ec4".into()]).unwrap();
        let ramp = ColorRamp::new(&colors).unwrap();
        assert_eq!(ramp.at(0.0), [0x49, 0x8e, 0xc4]);
        assert_eq!(ramp.at(0.7), [0x49, 0x8e, 0xc4]);
        assert!(ColorRamp::new(&[]).is_none());
    }
}
