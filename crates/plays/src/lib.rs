//! Plays catalog domain module.
//!
//! This crate contains the read-only play metadata the billing engine
//! prices against, implemented purely as deterministic domain data (no IO,
//! no HTTP, no storage).

pub mod play;

pub use play::{Catalog, Play, PlayId, PlayKind};
