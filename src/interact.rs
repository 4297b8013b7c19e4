//! Injected interaction capabilities
//!
//! The controller never talks to an RNG or to the terminal directly;
//! it goes through these traits so the binary can wire up real
//! implementations and tests can inject deterministic ones.

use crate::model::Video;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Uniform random index source used by `play_random`
///
/// `pick(n)` returns an index in `0..n` and is only called with
/// `n > 0`.
pub trait RandomPicker {
    fn pick(&mut self, n: usize) -> usize;
}

/// Thread-RNG backed picker for normal operation
pub struct UniformPicker {
    rng: ThreadRng,
}

impl UniformPicker {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for UniformPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPicker for UniformPicker {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Seeded picker for reproducible sessions (`--seed`)
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomPicker for SeededPicker {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Picker that always returns the same index, for deterministic tests.
/// The index is clamped into range so a fixture can't go out of bounds.
pub struct FixedPicker(pub usize);

impl RandomPicker for FixedPicker {
    fn pick(&mut self, n: usize) -> usize {
        self.0.min(n - 1)
    }
}

/// Selection collection after a search
///
/// Receives the displayed, title-sorted result list and returns a
/// 1-based index into it, or `None` for "no selection". Any
/// non-numeric or out-of-range answer counts as no selection.
pub trait SelectionInput {
    fn request_selection(&mut self, results: &[Video]) -> Option<usize>;
}

/// Interactive selection: prints the numbered result list and a
/// prompt, then reads one line from stdin
pub struct StdinSelection;

impl SelectionInput for StdinSelection {
    fn request_selection(&mut self, results: &[Video]) -> Option<usize> {
        for (i, video) in results.iter().enumerate() {
            println!("  {}) {}", i + 1, crate::repl::format_video(video));
        }
        println!("Would you like to play any of the above? If yes, please specify the number of the video.");
        println!("An invalid number means you don't want to.");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }
        let selection: usize = line.trim().parse().ok()?;
        if selection < 1 || selection > results.len() {
            return None;
        }
        Some(selection)
    }
}

/// Selection stub that never picks anything
pub struct NoSelection;

impl SelectionInput for NoSelection {
    fn request_selection(&mut self, _results: &[Video]) -> Option<usize> {
        None
    }
}

/// Selection stub that always answers with the same 1-based index,
/// valid or not
pub struct FixedSelection(pub usize);

impl SelectionInput for FixedSelection {
    fn request_selection(&mut self, _results: &[Video]) -> Option<usize> {
        Some(self.0)
    }
}
