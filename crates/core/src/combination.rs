//! A single draw: six sorted main numbers plus one bonus number.

use crate::error::DrawError;
use crate::prng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{trace, warn};

/// Smallest drawable ball.
pub const BALL_MIN: u8 = 1;
/// Largest drawable ball.
pub const BALL_MAX: u8 = 45;
/// Number of main balls in a combination.
pub const MAIN_COUNT: usize = 6;
/// Underlying draws allowed before [`sample_combination`] gives up on the source.
pub const MAX_DRAWS: usize = 10_000;

const TOTAL_BALLS: usize = MAIN_COUNT + 1;

/// Six distinct main numbers in ascending order plus a distinct bonus number.
///
/// All seven values lie in `BALL_MIN..=BALL_MAX`. The bonus has no ordering
/// relation to the main numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCombination")]
pub struct Combination {
    main: [u8; MAIN_COUNT],
    bonus: u8,
}

#[derive(Deserialize)]
struct RawCombination {
    main: [u8; MAIN_COUNT],
    bonus: u8,
}

impl TryFrom<RawCombination> for Combination {
    type Error = DrawError;

    fn try_from(raw: RawCombination) -> Result<Self, Self::Error> {
        Combination::new(raw.main, raw.bonus)
    }
}

impl Combination {
    /// Builds a combination from caller-supplied values, checking every invariant.
    pub fn new(main: [u8; MAIN_COUNT], bonus: u8) -> Result<Self, DrawError> {
        if let Some(&v) = main
            .iter()
            .chain(std::iter::once(&bonus))
            .find(|v| !(BALL_MIN..=BALL_MAX).contains(*v))
        {
            return Err(DrawError::InvalidCombination(format!(
                "{v} is outside {BALL_MIN}..={BALL_MAX}"
            )));
        }
        if main.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DrawError::InvalidCombination(format!(
                "main numbers {main:?} are not strictly ascending"
            )));
        }
        if main.contains(&bonus) {
            return Err(DrawError::InvalidCombination(format!(
                "bonus {bonus} repeats a main number"
            )));
        }
        Ok(Self { main, bonus })
    }

    /// The six main numbers, ascending.
    pub fn main(&self) -> &[u8; MAIN_COUNT] {
        &self.main
    }

    /// The bonus number. Never equal to any main number.
    pub fn bonus(&self) -> u8 {
        self.bonus
    }

    /// All seven values: main numbers first, bonus last.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.main.iter().copied().chain(std::iter::once(self.bonus))
    }

    /// Whether `value` appears anywhere in the combination.
    pub fn contains(&self, value: u8) -> bool {
        self.bonus == value || self.main.contains(&value)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.main.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n:2}")?;
        }
        write!(f, " + {:2}", self.bonus)
    }
}

/// Samples a combination by accept/reject drawing without replacement.
///
/// Draws uniformly from `BALL_MIN..=BALL_MAX` one value at a time, discarding
/// repeats, until seven distinct values are accepted. The first six (sorted)
/// become the main numbers and the seventh, in draw order, the bonus.
///
/// A healthy source needs about 7.5 draws on average. A source that keeps
/// repeating itself trips the [`MAX_DRAWS`] cap and yields
/// [`DrawError::SourceExhausted`] instead of looping forever.
pub fn sample_combination<R: RandomSource + ?Sized>(
    rng: &mut R,
) -> Result<Combination, DrawError> {
    let span = u64::from(BALL_MAX - BALL_MIN) + 1;
    let mut accepted = [0u8; TOTAL_BALLS];
    let mut len = 0;
    let mut draws = 0;

    while len < TOTAL_BALLS {
        if draws >= MAX_DRAWS {
            warn!(draws, accepted = len, "random source stopped producing new values");
            return Err(DrawError::SourceExhausted {
                draws,
                accepted: len,
            });
        }
        draws += 1;
        // span <= 45 so the narrowing is lossless
        let value = BALL_MIN + rng.next_below(span) as u8;
        if accepted[..len].contains(&value) {
            trace!(value, "rejected repeated draw");
            continue;
        }
        accepted[len] = value;
        len += 1;
    }

    let mut main = [0u8; MAIN_COUNT];
    main.copy_from_slice(&accepted[..MAIN_COUNT]);
    main.sort_unstable();
    Ok(Combination {
        main,
        bonus: accepted[MAIN_COUNT],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;

    /// Replays a fixed list of raw values, then repeats the last one forever.
    struct Scripted {
        values: Vec<u64>,
        pos: usize,
    }

    impl Scripted {
        fn new(values: &[u64]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_u64(&mut self) -> u64 {
            let v = self.values[self.pos.min(self.values.len() - 1)];
            self.pos += 1;
            v
        }
    }

    fn assert_valid(c: &Combination) {
        let values: Vec<u8> = c.values().collect();
        assert_eq!(values.len(), 7);
        for (i, a) in values.iter().enumerate() {
            assert!((BALL_MIN..=BALL_MAX).contains(a), "{a} out of range in {c}");
            for b in &values[i + 1..] {
                assert_ne!(a, b, "duplicate {a} in {c}");
            }
        }
        assert!(
            c.main().windows(2).all(|w| w[0] < w[1]),
            "main not ascending in {c}"
        );
    }

    #[test]
    fn sampled_combinations_hold_invariants() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..10_000 {
            assert_valid(&sample_combination(&mut rng).unwrap());
        }
    }

    #[test]
    fn first_six_accepted_are_main_and_seventh_is_bonus() {
        // raw % 45 + 1: 40, 3, 3 (rejected), 12, 45, 1, 20, 7
        let mut rng = Scripted::new(&[39, 2, 47, 11, 44, 0, 19, 6]);
        let c = sample_combination(&mut rng).unwrap();
        assert_eq!(c.main(), &[1, 3, 12, 20, 40, 45]);
        assert_eq!(c.bonus(), 7);
        assert_eq!(rng.pos, 8);
    }

    #[test]
    fn bonus_keeps_draw_order_even_when_smallest() {
        let mut rng = Scripted::new(&[44, 43, 42, 41, 40, 39, 0]);
        let c = sample_combination(&mut rng).unwrap();
        assert_eq!(c.main(), &[40, 41, 42, 43, 44, 45]);
        assert_eq!(c.bonus(), 1);
    }

    #[test]
    fn stuck_source_fails_instead_of_hanging() {
        let mut rng = Scripted::new(&[5]);
        let err = sample_combination(&mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::SourceExhausted {
                draws: MAX_DRAWS,
                accepted: 1,
            }
        );
    }

    #[test]
    fn main_number_frequencies_are_near_uniform() {
        const SAMPLES: usize = 100_000;
        let mut rng = Xorshift64::new(0xC0FFEE);
        let mut counts = [0usize; BALL_MAX as usize + 1];
        for _ in 0..SAMPLES {
            let c = sample_combination(&mut rng).unwrap();
            for &n in c.main() {
                counts[n as usize] += 1;
            }
        }
        let expected = SAMPLES as f64 * MAIN_COUNT as f64 / BALL_MAX as f64;
        for v in BALL_MIN..=BALL_MAX {
            let observed = counts[v as usize] as f64;
            let deviation = (observed - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "value {v}: {observed} hits vs expected {expected:.0} ({:.1}% off)",
                deviation * 100.0
            );
        }
    }

    #[test]
    fn consecutive_samples_almost_always_differ() {
        let mut rng = Xorshift64::new(314);
        let mut previous = sample_combination(&mut rng).unwrap();
        let mut repeats = 0;
        for _ in 0..1_000 {
            let next = sample_combination(&mut rng).unwrap();
            if next == previous {
                eprintln!("note: consecutive identical combination {next}");
                repeats += 1;
            }
            previous = next;
        }
        // ~1.2e-4 expected repeats in 1000 pairs
        assert!(repeats <= 1, "{repeats} consecutive repeats");
    }

    #[test]
    fn new_accepts_valid_values() {
        let c = Combination::new([3, 9, 17, 28, 33, 45], 1).unwrap();
        assert!(c.contains(45));
        assert!(c.contains(1));
        assert!(!c.contains(2));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Combination::new([0, 9, 17, 28, 33, 45], 1).is_err());
        assert!(Combination::new([3, 9, 17, 28, 33, 45], 46).is_err());
    }

    #[test]
    fn new_rejects_unsorted_or_repeated_main() {
        assert!(Combination::new([9, 3, 17, 28, 33, 45], 1).is_err());
        assert!(Combination::new([3, 3, 17, 28, 33, 45], 1).is_err());
    }

    #[test]
    fn new_rejects_bonus_repeating_main() {
        let err = Combination::new([3, 9, 17, 28, 33, 45], 17).unwrap_err();
        assert!(err.to_string().contains("bonus 17"), "got: {err}");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Combination =
            serde_json::from_str(r#"{"main":[1,2,3,4,5,6],"bonus":7}"#).unwrap();
        assert_eq!(ok.bonus(), 7);
        let bad = serde_json::from_str::<Combination>(r#"{"main":[1,2,3,4,5,6],"bonus":6}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn display_pads_and_separates_bonus() {
        let c = Combination::new([3, 9, 17, 28, 33, 45], 1).unwrap();
        assert_eq!(c.to_string(), " 3  9 17 28 33 45 +  1");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_seed_yields_valid_combination(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let c = sample_combination(&mut rng).unwrap();
                assert_valid(&c);
                prop_assert!(Combination::new(*c.main(), c.bonus()).is_ok());
            }
        }
    }
}
