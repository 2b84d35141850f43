//! Display color for a note, plus the fixed palette offered to users.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `#RRGGBB` color string.
///
/// Stored normalized to uppercase with a leading `#`. The value is only
/// used for display; the store accepts any well-formed color, while the
/// editor offers the entries of [`PALETTE`].
///
/// # Examples
///
/// ```
/// use flownotes::domain::ColorHex;
///
/// let color = ColorHex::new("#fff9c4").unwrap();
/// assert_eq!(color.as_str(), "#FFF9C4");
/// assert_eq!(ColorHex::default().as_str(), "#FFFFFF");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColorHex(String);

/// Error returned when parsing an invalid color.
#[derive(Debug, Clone)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Colors offered by the note editor, in display order.
pub const PALETTE: &[PaletteColor] = &[
    PaletteColor { name: "white", hex: "#FFFFFF" },
    PaletteColor { name: "red", hex: "#FFCDD2" },
    PaletteColor { name: "yellow", hex: "#FFF9C4" },
    PaletteColor { name: "green", hex: "#C8E6C9" },
    PaletteColor { name: "blue", hex: "#BBDEFB" },
    PaletteColor { name: "purple", hex: "#D1C4E9" },
];

impl ColorHex {
    /// Parses a `#RRGGBB` color.
    ///
    /// Surrounding whitespace is trimmed and hex digits are uppercased.
    ///
    /// # Errors
    ///
    /// Returns `ParseColorError` if the value is not `#` followed by exactly
    /// six hex digits.
    pub fn new(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').ok_or_else(|| {
            ParseColorError(format!("invalid color '{}': must start with '#'", trimmed))
        })?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(format!(
                "invalid color '{}': expected six hex digits like #FFCDD2",
                trimmed
            )));
        }

        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Resolves either a palette name (case-insensitive) or a hex color.
    pub fn from_name_or_hex(s: &str) -> Result<Self, ParseColorError> {
        let wanted = s.trim();
        match PALETTE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
        {
            Some(entry) => Self::new(entry.hex),
            None => Self::new(wanted),
        }
    }

    /// Returns the normalized color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the palette name for this color, if it is a palette entry.
    pub fn palette_name(&self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|entry| entry.hex == self.0)
            .map(|entry| entry.name)
    }
}

impl Default for ColorHex {
    fn default() -> Self {
        Self(PALETTE[0].hex.to_string())
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorHex(\"{}\")", self.0)
    }
}

impl FromStr for ColorHex {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ColorHex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ColorHex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_uppercase_hex() {
        assert_eq!(ColorHex::new("#FFCDD2").unwrap().as_str(), "#FFCDD2");
    }

    #[test]
    fn normalizes_lowercase_and_whitespace() {
        assert_eq!(ColorHex::new("  #bbdefb ").unwrap().as_str(), "#BBDEFB");
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(ColorHex::new("FFCDD2").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ColorHex::new("#FFF").is_err());
        assert!(ColorHex::new("#FFCDD2AA").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(ColorHex::new("#GGGGGG").is_err());
    }

    #[test]
    fn default_is_white() {
        assert_eq!(ColorHex::default().as_str(), "#FFFFFF");
        assert_eq!(ColorHex::default().palette_name(), Some("white"));
    }

    #[test]
    fn resolves_palette_names() {
        let color = ColorHex::from_name_or_hex("Yellow").unwrap();
        assert_eq!(color.as_str(), "#FFF9C4");
    }

    #[test]
    fn resolves_raw_hex_outside_palette() {
        let color = ColorHex::from_name_or_hex("#123abc").unwrap();
        assert_eq!(color.as_str(), "#123ABC");
        assert_eq!(color.palette_name(), None);
    }

    #[test]
    fn palette_entries_are_valid_colors() {
        for entry in PALETTE {
            assert_eq!(ColorHex::new(entry.hex).unwrap().as_str(), entry.hex);
        }
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let result: Result<ColorHex, _> = serde_json::from_str("\"red\"");
        assert!(result.is_err());
    }
}
