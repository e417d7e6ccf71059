//! Random source seam for combat rolls, spawns, and loot.
//!
//! Every random draw in the core goes through [`RngOracle`], so the engine
//! never touches a global generator. Production code uses [`SeededRng`];
//! tests use [`ScriptedRng`] to force blocks, dodges, criticals, and drops.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integer draws.
pub trait RngOracle {
    /// Draw a uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32;

    /// Draw a percent roll in `[0, 100]` inclusive.
    ///
    /// Note the inclusive upper bound: there are 101 outcomes, so a chance of
    /// 100 still fails on a roll of exactly 100.
    fn roll_percent(&mut self) -> u32 {
        self.range(0, 100)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

/// [`RngOracle`] backed by a seeded [`StdRng`].
///
/// The seed is kept so it can be logged and a session replayed.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator with a seed drawn from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngOracle for SeededRng {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each scripted value is clamped into the requested range. Once the script
/// runs out, every draw returns the lower bound of the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngOracle for ScriptedRng {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        match self.draws.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }
}

/// Picks an index with probability `weights[i] / sum(weights)`.
///
/// Equivalent to expanding each index `weights[i]` times and drawing uniformly
/// from the expansion, without allocating it. Returns `None` when the weights
/// are empty, all zero, or sum past `u32::MAX`.
pub fn weighted_index(weights: &[u32], rng: &mut (impl RngOracle + ?Sized)) -> Option<usize> {
    let total = total_weight(weights)?;
    if total == 0 {
        return None;
    }

    let mut roll = rng.range(0, total - 1);
    for (index, &weight) in weights.iter().enumerate() {
        if roll < weight {
            return Some(index);
        }
        roll -= weight;
    }
    None
}

/// Sum of `weights`, or `None` if it does not fit in a `u32`.
pub(crate) fn total_weight(weights: &[u32]) -> Option<u32> {
    weights
        .iter()
        .try_fold(0u32, |total, &weight| total.checked_add(weight))
}

/// Picks one of `outcomes` using the parallel integer `weights`.
///
/// Outcomes without a matching weight are never chosen.
pub fn weighted_choice<'a, T>(
    outcomes: &'a [T],
    weights: &[u32],
    rng: &mut (impl RngOracle + ?Sized),
) -> Option<&'a T> {
    let len = outcomes.len().min(weights.len());
    weighted_index(&weights[..len], rng).map(|index| &outcomes[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        let left: Vec<u32> = (0..16).map(|_| a.roll_percent()).collect();
        let right: Vec<u32> = (0..16).map(|_| b.roll_percent()).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn seeded_rng_stays_in_range() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let value = rng.range(3, 5);
            assert!((3..=5).contains(&value));
        }
        assert_eq!(rng.range(9, 9), 9);
    }

    #[test]
    fn scripted_rng_clamps_and_falls_back() {
        let mut rng = ScriptedRng::new([150, 2]);
        assert_eq!(rng.roll_percent(), 100);
        assert_eq!(rng.range(5, 10), 5);
        assert_eq!(rng.range(4, 8), 4);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn weighted_index_walks_cumulative_weights() {
        let weights = [30, 30, 20, 10, 10];
        let cases = [(0, 0), (29, 0), (30, 1), (59, 1), (60, 2), (80, 3), (90, 4), (99, 4)];
        for (draw, expected) in cases {
            let mut rng = ScriptedRng::new([draw]);
            assert_eq!(weighted_index(&weights, &mut rng), Some(expected), "draw {draw}");
        }
    }

    #[test]
    fn zero_weights_are_never_chosen() {
        let weights = [0, 5, 0];
        for draw in 0..5 {
            let mut rng = ScriptedRng::new([draw]);
            assert_eq!(weighted_index(&weights, &mut rng), Some(1));
        }
    }

    #[test]
    fn empty_distribution_yields_none() {
        let mut rng = ScriptedRng::default();
        assert_eq!(weighted_index(&[], &mut rng), None);
        assert_eq!(weighted_index(&[0, 0], &mut rng), None);
        let outcomes: [&str; 0] = [];
        assert_eq!(weighted_choice(&outcomes, &[], &mut rng), None);
    }

    #[test]
    fn overflowing_total_yields_none() {
        let mut rng = ScriptedRng::new([0]);
        assert_eq!(total_weight(&[u32::MAX, 1]), None);
        assert_eq!(weighted_index(&[u32::MAX, 1], &mut rng), None);
        assert_eq!(weighted_index(&[u32::MAX - 1, 1], &mut rng), Some(0));
    }

    #[test]
    fn weighted_choice_is_roughly_proportional() {
        let outcomes = ["apple", "potion"];
        let mut rng = SeededRng::new(1234);
        let mut apples = 0;
        for _ in 0..10_000 {
            if *weighted_choice(&outcomes, &[60, 40], &mut rng).unwrap() == "apple" {
                apples += 1;
            }
        }
        assert!((5_500..6_500).contains(&apples), "apples = {apples}");
    }
}
