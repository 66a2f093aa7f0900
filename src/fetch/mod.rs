//! Random-creature fetch use case and its published result.

mod orchestrator;
mod random;
mod store;

pub use orchestrator::{FetchOrchestrator, FetchSettings};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use store::{FetchResult, ResultStore, ResultSubscription};
