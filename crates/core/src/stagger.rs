//! Reveal-animation offsets for render plans.
//!
//! Staggers only sequence a presentation layer's animations; they never change
//! which numbers are drawn.

use crate::error::DrawError;
use crate::params::param_f64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default delay between consecutive rows, in seconds.
pub const ROW_STAGGER: f64 = 0.15;
/// Default delay between consecutive main balls within a row.
pub const BALL_STAGGER: f64 = 0.06;
/// Default delay of the bonus ball relative to its row start.
pub const BONUS_STAGGER: f64 = 0.4;
/// Largest accepted offset. Keeps every delay in a five-row plan under two minutes.
pub const MAX_OFFSET: f64 = 10.0;

/// The three animation offsets used when building a render plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub row: f64,
    pub ball: f64,
    pub bonus: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            row: ROW_STAGGER,
            ball: BALL_STAGGER,
            bonus: BONUS_STAGGER,
        }
    }
}

impl Stagger {
    /// Reads overrides from a JSON object; missing or mistyped keys keep the default.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            row: param_f64(params, "row", d.row),
            ball: param_f64(params, "ball", d.ball),
            bonus: param_f64(params, "bonus", d.bonus),
        }
    }

    /// A stagger with every offset zero, for surfaces that do not animate.
    pub fn none() -> Self {
        Self {
            row: 0.0,
            ball: 0.0,
            bonus: 0.0,
        }
    }

    /// Rejects offsets that are negative, not finite, or above [`MAX_OFFSET`].
    pub fn validate(&self) -> Result<(), DrawError> {
        for (name, value) in [("row", self.row), ("ball", self.ball), ("bonus", self.bonus)] {
            if !(0.0..=MAX_OFFSET).contains(&value) {
                return Err(DrawError::InvalidStagger {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Delay of main ball `ball` in row `row`.
    pub fn main_delay(&self, row: usize, ball: usize) -> f64 {
        row as f64 * self.row + ball as f64 * self.ball
    }

    /// Delay of the bonus ball in row `row`.
    pub fn bonus_delay(&self, row: usize) -> f64 {
        row as f64 * self.row + self.bonus
    }
}
