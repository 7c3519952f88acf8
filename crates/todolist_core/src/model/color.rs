//! Category color value.
//!
//! # Responsibility
//! - Parse and normalize user/persisted hex color text.
//! - Pick random flat palette colors for new categories.
//!
//! # Invariants
//! - A `HexColor` always holds lowercase `#rrggbb` text.

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color regex")
});

/// Flat UI palette used for randomly colored new categories.
const FLAT_PALETTE: &[&str] = &[
    "#1abc9c", "#16a085", "#2ecc71", "#27ae60", "#3498db", "#2980b9", "#9b59b6", "#8e44ad",
    "#34495e", "#2c3e50", "#f1c40f", "#f39c12", "#e67e22", "#d35400", "#e74c3c", "#c0392b",
    "#ecf0f1", "#bdc3c7", "#95a5a6", "#7f8c8d",
];

/// Error returned when text is not a `#rgb` / `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hex color `{}`", self.input)
    }
}

impl Error for ColorParseError {}

/// Serialized color of a category row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Seed used by the color editor when a row has no readable color.
    pub const WHITE_HEX: &'static str = "#ffffff";

    /// Parses `#rgb` or `#rrggbb` (leading `#` optional, any case).
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let Some(caps) = HEX_COLOR_RE.captures(trimmed) else {
            return Err(ColorParseError {
                input: value.to_string(),
            });
        };

        let digits = caps[1].to_ascii_lowercase();
        let expanded = if digits.len() == 3 {
            digits.chars().flat_map(|ch| [ch, ch]).collect::<String>()
        } else {
            digits
        };
        Ok(Self(format!("#{expanded}")))
    }

    /// Picks one palette color uniformly at random.
    pub fn random_flat() -> Self {
        let picked = FLAT_PALETTE
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(Self::WHITE_HEX);
        Self(picked.to_string())
    }

    pub fn white() -> Self {
        Self(Self::WHITE_HEX.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{HexColor, FLAT_PALETTE};

    #[test]
    fn parse_normalizes_case_and_short_form() {
        assert_eq!(HexColor::parse("#FF0000").unwrap().as_str(), "#ff0000");
        assert_eq!(HexColor::parse("0f0").unwrap().as_str(), "#00ff00");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("#gggggg").is_err());
        assert!(HexColor::parse("red").is_err());
    }

    #[test]
    fn random_flat_comes_from_palette() {
        for _ in 0..32 {
            let color = HexColor::random_flat();
            assert!(FLAT_PALETTE.contains(&color.as_str()));
        }
    }
}
