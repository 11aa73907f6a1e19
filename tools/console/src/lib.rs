//! Console reporting and demo harness
//!
//! Renders human-readable listings from the exchange core's read
//! accessors and seeds the reference demo dataset.
//!
//! # Modules
//! - `reports` — portfolio, order, trade-history and bid-ask-spread
//!   renderers
//! - `demo` — the reference dataset

pub mod demo;
pub mod reports;
