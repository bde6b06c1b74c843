//! Wave palettes.

use super::color::{ColorError, Rgb};
use super::wave::LAYERS;
use serde::{Deserialize, Serialize};

/// Error building a palette.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PaletteError {
    /// Palettes hold one to three colors.
    #[display("Palette must have 1 to 3 colors, got {}", _0)]
    #[from(ignore)]
    WrongSize(#[error(not(source))] usize),
    /// A color failed to parse.
    #[display("{}", _0)]
    Color(ColorError),
}

/// One to three colors, painted back to front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a palette.
    ///
    /// # Errors
    ///
    /// [`PaletteError::WrongSize`] unless 1–3 colors are given.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() || colors.len() > LAYERS.len() {
            return Err(PaletteError::WrongSize(colors.len()));
        }
        Ok(Self { colors })
    }

    /// Parses a palette from hex strings.
    ///
    /// # Errors
    ///
    /// Bad colors or a bad count.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|c| c.as_ref().parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Color for wave layer `layer`. Layers past the end reuse the last color.
    pub fn color_for_layer(&self, layer: usize) -> Rgb {
        let idx = layer.min(self.colors.len() - 1);
        self.colors[idx]
    }

    /// The colors as given.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Rgb>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_limits() {
        assert_eq!(Palette::parse::<&str>(&[]), Err(PaletteError::WrongSize(0)));
        assert_eq!(
            Palette::parse(&["#000", "#111", "#222", "#333"]),
            Err(PaletteError::WrongSize(4))
        );
        assert!(Palette::parse(&["#000"]).is_ok());
    }

    #[test]
    fn test_bad_color_is_reported() {
        assert!(matches!(
            Palette::parse(&["#000", "blue"]),
            Err(PaletteError::Color(_))
        ));
    }

    #[test]
    fn test_short_palette_reuses_last_color() {
        let palette = Palette::parse(&["#43c0e4"]).unwrap();
        let only = Rgb::new(0x43, 0xc0, 0xe4);
        assert_eq!(palette.color_for_layer(0), only);
        assert_eq!(palette.color_for_layer(2), only);

        let palette = Palette::parse(&["#666", "#ccc"]).unwrap();
        assert_eq!(palette.color_for_layer(2), Rgb::new(0xcc, 0xcc, 0xcc));
    }
}
