//! Hex colors and alpha blending.

use serde::{Deserialize, Serialize};

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

/// Error parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid color {:?}: expected #rgb or #rrggbb", input)]
pub struct ColorError {
    /// The rejected text.
    pub input: String,
}

impl Rgb {
    /// Creates a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Paints `top` over `self` at opacity `alpha` (clamped to 0..=1).
    pub fn blend(self, top: Rgb, alpha: f64) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| {
            (f64::from(under) * (1.0 - alpha) + f64::from(over) * alpha).round() as u8
        };
        Rgb::new(mix(self.r, top.r), mix(self.g, top.g), mix(self.b, top.b))
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| err());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());

        match hex.len() {
            // #abc is shorthand for #aabbcc.
            3 => Ok(Rgb::new(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Rgb::new(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!("#666".parse::<Rgb>(), Ok(Rgb::new(0x66, 0x66, 0x66)));
        assert_eq!("#43c0e4".parse::<Rgb>(), Ok(Rgb::new(0x43, 0xc0, 0xe4)));
        assert_eq!("#FFF".parse::<Rgb>(), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["666", "#66", "#gggggg", "#1234567", "", "#12345é"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_display_is_long_lowercase_hex() {
        assert_eq!(Rgb::new(0x43, 0xc0, 0xe4).to_string(), "#43c0e4");
    }

    #[test]
    fn test_blend_extremes_and_midpoint() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.blend(white, 0.0), black);
        assert_eq!(black.blend(white, 1.0), white);
        assert_eq!(black.blend(white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.blend(white, 7.0), white);
    }
}
