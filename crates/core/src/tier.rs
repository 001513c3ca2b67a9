//! Display tiers: cosmetic color buckets for ball values.

use crate::color::Rgb;
use crate::combination::{BALL_MAX, BALL_MIN};
use crate::error::DrawError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of five display buckets a ball value falls into.
///
/// Bands are ten values wide except the last, which covers 41..=45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "tier-1")]
    One,
    #[serde(rename = "tier-2")]
    Two,
    #[serde(rename = "tier-3")]
    Three,
    #[serde(rename = "tier-4")]
    Four,
    #[serde(rename = "tier-5")]
    Five,
}

impl Tier {
    /// All tiers in ascending band order.
    pub const ALL: [Tier; 5] = [Tier::One, Tier::Two, Tier::Three, Tier::Four, Tier::Five];

    /// Stable identifier, e.g. `"tier-3"`.
    pub fn name(self) -> &'static str {
        match self {
            Tier::One => "tier-1",
            Tier::Two => "tier-2",
            Tier::Three => "tier-3",
            Tier::Four => "tier-4",
            Tier::Five => "tier-5",
        }
    }

    /// Human color name used by the widget stylesheet.
    pub fn color_name(self) -> &'static str {
        match self {
            Tier::One => "yellow",
            Tier::Two => "blue",
            Tier::Three => "red",
            Tier::Four => "gray",
            Tier::Five => "green",
        }
    }

    /// Ball background color.
    pub fn color(self) -> Rgb {
        match self {
            Tier::One => Rgb::new(0xfb, 0xc4, 0x00),
            Tier::Two => Rgb::new(0x69, 0xc8, 0xf2),
            Tier::Three => Rgb::new(0xff, 0x72, 0x72),
            Tier::Four => Rgb::new(0xaa, 0xaa, 0xaa),
            Tier::Five => Rgb::new(0xb0, 0xd8, 0x40),
        }
    }

    /// The ball values this tier covers.
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            Tier::One => 1..=10,
            Tier::Two => 11..=20,
            Tier::Three => 21..=30,
            Tier::Four => 31..=40,
            Tier::Five => 41..=45,
        }
    }

    /// Checked classification: rejects values outside 1..=45.
    pub fn try_from_value(value: u32) -> Result<Tier, DrawError> {
        if !(BALL_MIN as u32..=BALL_MAX as u32).contains(&value) {
            return Err(DrawError::OutOfRange(value));
        }
        Ok(classify_tier(value as u8))
    }
}

/// A tier's band and colors, as handed to legend renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierBand {
    pub tier: Tier,
    pub min: u8,
    pub max: u8,
    pub color: &'static str,
    pub hex: Rgb,
}

impl Tier {
    /// This tier's band description.
    pub fn band(self) -> TierBand {
        let range = self.range();
        TierBand {
            tier: self,
            min: *range.start(),
            max: *range.end(),
            color: self.color_name(),
            hex: self.color(),
        }
    }

    /// Every tier's band, in ascending order.
    pub fn legend() -> [TierBand; 5] {
        Tier::ALL.map(Tier::band)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a ball value into its display tier.
///
/// Band upper bounds are inclusive. Values the sampler never produces still
/// land somewhere: 0 maps to tier-1 and anything above 45 to tier-5.
pub fn classify_tier(value: u8) -> Tier {
    match value {
        0..=10 => Tier::One,
        11..=20 => Tier::Two,
        21..=30 => Tier::Three,
        31..=40 => Tier::Four,
        _ => Tier::Five,
    }
}
