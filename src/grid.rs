use serde::{Deserialize, Serialize};

pub const GRID_AXIS: usize = 10;

/// Uniform draws in `[0, 1)`. Injectable so the shuffle is reproducible in
/// tests with a canned sequence.
pub trait RandomSource {
    fn draw(&mut self) -> f64;
}

/// Production source backed by the thread-local rand generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Row and column digit labels for a 10x10 squares grid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridNumbers {
    pub rows: [u8; GRID_AXIS],
    pub cols: [u8; GRID_AXIS],
}

/// Draw both axes. Each axis is an independent unbiased shuffle of 0-9 and
/// consumes exactly nine draws from `rng`.
#[must_use]
pub fn generate(rng: &mut dyn RandomSource) -> GridNumbers {
    GridNumbers {
        rows: shuffled_digits(rng),
        cols: shuffled_digits(rng),
    }
}

/// Fisher-Yates over the identity sequence: walk i from the top, swap i with
/// a uniform j in 0..=i.
fn shuffled_digits(rng: &mut dyn RandomSource) -> [u8; GRID_AXIS] {
    let mut digits: [u8; GRID_AXIS] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    for i in (1..GRID_AXIS).rev() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let j = (rng.draw() * (i as f64 + 1.0)) as usize;
        digits.swap(i, j.min(i));
    }
    digits
}

/// True iff `seq` holds each of the digits 0-9 exactly once. Run on any grid
/// digits that arrive from outside (stored pools, admin overrides) before use.
#[must_use]
pub fn is_valid_permutation(seq: &[u8]) -> bool {
    if seq.len() != GRID_AXIS {
        return false;
    }
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    sorted == [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
}
