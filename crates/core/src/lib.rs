#![deny(unsafe_code)]
//! Draw engine for the lotto-draw number widget.
//!
//! Samples combinations of six sorted main numbers plus a bonus number from
//! 1..=45, classifies every ball into a display [`Tier`], and lays batches of
//! combinations out as a render plan with staggered reveal delays. The engine
//! holds no state of its own: callers pass the [`RandomSource`] in and get
//! plain data back.

pub mod batch;
pub mod color;
pub mod combination;
pub mod error;
pub mod params;
pub mod prng;
pub mod seed;
pub mod stagger;
pub mod tier;

pub use batch::{generate_batch, BallSlot, DrawBatch, DrawRow, MAX_SETS, MIN_SETS};
pub use color::Rgb;
pub use combination::{sample_combination, Combination, BALL_MAX, BALL_MIN};
pub use error::DrawError;
pub use prng::{RandomSource, Xorshift64};
pub use seed::DrawSeed;
pub use stagger::Stagger;
pub use tier::{classify_tier, Tier, TierBand};
