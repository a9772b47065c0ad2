use std::collections::VecDeque;

use rand::Rng;

/// Source of the random choices made while writing chef feedback.
pub trait DrawSource {
    /// Uniform integer in `low..=high`. Requires `low <= high`.
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. Requires `len > 0`.
    fn draw_index(&mut self, len: usize) -> usize;
}

/// Draws backed by any `rand` generator.
///
/// ```
/// use chef_kitchen::engine::{DrawSource, RngDraws};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut draws = RngDraws::new(StdRng::seed_from_u64(7));
/// let confidence = draws.draw_inclusive(95, 100);
/// assert!((95..=100).contains(&confidence));
/// ```
#[derive(Debug, Clone)]
pub struct RngDraws<R> {
    rng: R,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    fn draw_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed queue of offsets.
///
/// Each draw pops the next offset `o`: `draw_inclusive(low, high)` yields
/// `low + o % (high - low + 1)` and `draw_index(len)` yields `o % len`.
/// A range covering all of `u32` yields `o` unchanged. Once the queue is
/// empty every draw uses offset 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    offsets: VecDeque<u32>,
}

impl ScriptedDraws {
    pub fn new<I: IntoIterator<Item = u32>>(offsets: I) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.offsets.len()
    }

    fn next_offset(&mut self) -> u32 {
        self.offsets.pop_front().unwrap_or(0)
    }
}

impl DrawSource for ScriptedDraws {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high, "empty draw range {low}..={high}");
        let offset = self.next_offset();
        match high.saturating_sub(low).checked_add(1) {
            Some(span) => low + offset % span,
            None => offset,
        }
    }

    fn draw_index(&mut self, len: usize) -> usize {
        self.next_offset() as usize % len
    }
}
