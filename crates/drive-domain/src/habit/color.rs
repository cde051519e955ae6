use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// `#RRGGBB` color attached to a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Muted tone used for missed days on a light background
    pub const LIGHT_MUTE_PERCENT: i32 = 80;
    /// Muted tone used for missed days on a dark background
    pub const DARK_MUTE_PERCENT: i32 = -65;

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::Validation(format!(
                "Color must be a #RRGGBB hex code: {}",
                value
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| DomainError::Validation(format!("Invalid color {}: {}", value, e)))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lighten (positive percent) or darken (negative percent) every channel.
    pub fn adjust(&self, percent: i32) -> Self {
        let p = f64::from(percent) / 100.0;
        let shift = |value: u8| -> u8 {
            let v = f64::from(value);
            let adjusted = if percent > 0 {
                (v + (255.0 - v) * p).floor().min(255.0)
            } else {
                (v + v * p).floor().max(0.0)
            };
            adjusted as u8
        };

        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    pub fn muted_light(&self) -> Self {
        self.adjust(Self::LIGHT_MUTE_PERCENT)
    }

    pub fn muted_dark(&self) -> Self {
        self.adjust(Self::DARK_MUTE_PERCENT)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip_lowercases() {
        let color = HexColor::parse("#FF8800").unwrap();
        assert_eq!(color.to_string(), "#ff8800");
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(HexColor::parse("10b981").unwrap().to_string(), "#10b981");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("#gg0000").is_err());
        assert!(HexColor::parse("").is_err());
    }

    #[test]
    fn test_lighten() {
        // 0x10 + (255 - 16) * 0.8 = 207.2 -> 207
        let color = HexColor::parse("#101010").unwrap();
        assert_eq!(color.muted_light().to_string(), "#cfcfcf");
    }

    #[test]
    fn test_darken() {
        // 200 - 200 * 0.65 = 70
        let color = HexColor::parse("#c8c8c8").unwrap();
        assert_eq!(color.muted_dark().to_string(), "#464646");
    }

    #[test]
    fn test_adjust_clamps() {
        let white = HexColor::parse("#ffffff").unwrap();
        assert_eq!(white.adjust(100).to_string(), "#ffffff");
        let black = HexColor::parse("#000000").unwrap();
        assert_eq!(black.adjust(-100).to_string(), "#000000");
        assert_eq!(white.adjust(-100).to_string(), "#000000");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let color = HexColor::parse("#3b82f6").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }
}
