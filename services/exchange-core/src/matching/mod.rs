//! Matching logic module
//!
//! Crossing detection and settlement-step planning.

pub mod crossing;
pub mod settlement;

pub use crossing::crosses;
pub use settlement::Settlement;
