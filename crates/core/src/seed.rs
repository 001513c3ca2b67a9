//! Reproducible description of a draw request.
//!
//! A [`DrawSeed`] captures everything needed to recreate a batch: how many
//! sets, the PRNG seed, and the stagger offsets. Saved as JSON it lets a draw
//! be replayed exactly.

use crate::batch::{check_count, generate_batch, DrawBatch};
use crate::error::DrawError;
use crate::prng::Xorshift64;
use crate::stagger::Stagger;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawSeed {
    pub count: usize,
    pub seed: u64,
    #[serde(default)]
    pub stagger: Stagger,
}

impl DrawSeed {
    /// Creates a seed with default stagger offsets.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            stagger: Stagger::default(),
        }
    }

    pub fn validate(&self) -> Result<(), DrawError> {
        check_count(self.count)?;
        self.stagger.validate()
    }

    /// Runs the draw this seed describes. Identical seeds give identical batches.
    pub fn draw(&self) -> Result<DrawBatch, DrawError> {
        self.validate()?;
        let mut rng = Xorshift64::new(self.seed);
        generate_batch(self.count, &mut rng, &self.stagger)
    }

    /// Writes the seed as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), DrawError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| DrawError::Io(e.to_string()))?;
        std::fs::write(path, json)
            .map_err(|e| DrawError::Io(format!("{}: {e}", path.display())))
    }

    /// Reads and validates a seed previously written by [`DrawSeed::save`].
    pub fn load(path: &Path) -> Result<Self, DrawError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DrawError::Io(format!("{}: {e}", path.display())))?;
        let seed: DrawSeed = serde_json::from_str(&text)
            .map_err(|e| DrawError::InvalidSeedFile(format!("{}: {e}", path.display())))?;
        seed.validate()?;
        Ok(seed)
    }
}
