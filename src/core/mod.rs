//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod log;
pub mod snapshot;

// Re-export main types for cleaner imports
pub use currency::{Currency, Direction, RateFetcher};
pub use snapshot::RateSnapshot;
