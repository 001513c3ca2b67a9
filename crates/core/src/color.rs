//! 8-bit sRGB display colors for ball tiers.
//!
//! Serializes as a `"#rrggbb"` hex string so JSON render plans can be handed
//! straight to a stylesheet.

use crate::error::DrawError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Rgb, DrawError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(DrawError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| DrawError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Rec. 601 luma in [0, 255].
    pub fn luma(self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    /// Whether dark text reads better than light text on this background.
    pub fn prefers_dark_text(self) -> bool {
        self.luma() > 140.0
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_accepts_optional_hash_and_any_case() {
        assert_eq!(Rgb::from_hex("#FBC400").unwrap(), Rgb::new(0xfb, 0xc4, 0x00));
        assert_eq!(Rgb::from_hex("fbc400").unwrap(), Rgb::new(0xfb, 0xc4, 0x00));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Rgb::from_hex("#fff"),
            Err(DrawError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        let err = Rgb::from_hex("zz0000").unwrap_err();
        assert!(err.to_string().contains("red"), "got: {err}");
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        assert!(Rgb::from_hex("ééé").is_err());
    }

    #[test]
    fn to_hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x69, 0xc8, 0xf2)).unwrap();
        assert_eq!(json, "\"#69c8f2\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(0x69, 0xc8, 0xf2));
    }

    #[test]
    fn deserialize_rejects_bad_hex() {
        assert!(serde_json::from_str::<Rgb>("\"#nothex\"").is_err());
    }

    #[test]
    fn text_contrast_follows_luma() {
        assert!(Rgb::new(255, 255, 255).prefers_dark_text());
        assert!(!Rgb::new(0, 0, 0).prefers_dark_text());
    }
}
