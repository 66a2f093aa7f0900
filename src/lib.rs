//! Movement-triggered random creature lookups.
//!
//! A location stream is filtered by displacement; each accepted move draws
//! a random catalog id, fetches the record and its localized description,
//! and publishes one merged result for the presentation layer.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod lifecycle;
pub mod location;
pub mod logging;
pub mod mvi;
pub mod presenter;
pub mod shutdown;
