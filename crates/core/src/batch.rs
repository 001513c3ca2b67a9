//! Draw batches: the render plan handed to a presentation layer.
//!
//! A batch is one to [`MAX_SETS`] independent combinations, each tagged with
//! its row index, an optional letter label, and per-ball tier and reveal delay.
//! A renderer only has to walk the rows in order.

use crate::combination::{sample_combination, Combination, MAIN_COUNT};
use crate::error::DrawError;
use crate::prng::RandomSource;
use crate::stagger::Stagger;
use crate::tier::{classify_tier, Tier};
use serde::Serialize;
use tracing::debug;

/// Fewest sets a batch may hold.
pub const MIN_SETS: usize = 1;
/// Most sets a batch may hold.
pub const MAX_SETS: usize = 5;

/// One ball as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSlot {
    pub value: u8,
    pub tier: Tier,
    /// Reveal delay in seconds from the start of the batch animation.
    pub delay: f64,
}

impl BallSlot {
    fn new(value: u8, delay: f64) -> Self {
        Self {
            value,
            tier: classify_tier(value),
            delay,
        }
    }
}

/// One combination at a fixed position in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawRow {
    pub index: usize,
    /// `'A'`, `'B'`, ... when the batch has more than one row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<char>,
    pub combination: Combination,
    pub main: [BallSlot; MAIN_COUNT],
    pub bonus: BallSlot,
}

impl DrawRow {
    fn new(index: usize, count: usize, combination: Combination, stagger: &Stagger) -> Self {
        let main = combination.main();
        Self {
            index,
            label: row_label(index, count),
            combination,
            main: std::array::from_fn(|j| BallSlot::new(main[j], stagger.main_delay(index, j))),
            bonus: BallSlot::new(combination.bonus(), stagger.bonus_delay(index)),
        }
    }

    /// Main balls followed by the bonus ball.
    pub fn slots(&self) -> impl Iterator<Item = &BallSlot> {
        self.main.iter().chain(std::iter::once(&self.bonus))
    }
}

/// An ordered, non-empty set of rows produced by one generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawBatch {
    rows: Vec<DrawRow>,
}

impl DrawBatch {
    /// Rows in render order; row `i` has index `i`.
    pub fn rows(&self) -> &[DrawRow] {
        &self.rows
    }

    /// Number of sets in the batch, between [`MIN_SETS`] and [`MAX_SETS`].
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for batches built by [`generate_batch`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The drawn combinations without their render data.
    pub fn combinations(&self) -> impl Iterator<Item = &Combination> {
        self.rows.iter().map(|r| &r.combination)
    }
}

impl<'a> IntoIterator for &'a DrawBatch {
    type Item = &'a DrawRow;
    type IntoIter = std::slice::Iter<'a, DrawRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Label for row `index` of a `count`-row batch: none for a single row.
pub fn row_label(index: usize, count: usize) -> Option<char> {
    if count <= 1 {
        return None;
    }
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

/// Checks that `count` is a supported number of sets.
pub fn check_count(count: usize) -> Result<(), DrawError> {
    if (MIN_SETS..=MAX_SETS).contains(&count) {
        Ok(())
    } else {
        Err(DrawError::InvalidCount {
            count,
            min: MIN_SETS,
            max: MAX_SETS,
        })
    }
}

/// Generates `count` independent combinations and lays them out as a render plan.
///
/// Combinations do not exclude each other's numbers. Row `i` ball `j` is
/// delayed `i * stagger.row + j * stagger.ball`; the bonus ball
/// `i * stagger.row + stagger.bonus`.
pub fn generate_batch<R: RandomSource + ?Sized>(
    count: usize,
    rng: &mut R,
    stagger: &Stagger,
) -> Result<DrawBatch, DrawError> {
    check_count(count)?;
    stagger.validate()?;

    let rows = (0..count)
        .map(|i| sample_combination(rng).map(|c| DrawRow::new(i, count, c, stagger)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count, "generated draw batch");
    Ok(DrawBatch { rows })
}
