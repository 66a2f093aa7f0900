//! Random id source.
//!
//! Abstracted so tests can pin the drawn id.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

/// Uniform integer source.
pub trait RandomSource: Send + Sync {
    /// Integer in `[min, max]`, inclusive on both ends.
    fn id_in_range(&self, min: u32, max: u32) -> u32;
}

/// Production source backed by `rand::thread_rng()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn id_in_range(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic source returning values from a sequence, cycling.
///
/// Values are clamped to the requested range.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<u32>,
    index: AtomicUsize,
}

impl FixedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn id_in_range(&self, min: u32, max: u32) -> u32 {
        if self.values.is_empty() {
            return min;
        }
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()].clamp(min, max)
    }
}
