//! Report renderers
//!
//! Pure projections of the exchange core's read accessors into the
//! fixed listing formats. Nothing here feeds back into matching.
//!
//! # Modules
//! - `portfolios` — per-user balances, alphabetical
//! - `orders` — per-user open and filled orders, chronological
//! - `trades` — trade history, chronological
//! - `spread` — per-asset best bid / best ask

pub mod orders;
pub mod portfolios;
pub mod spread;
pub mod trades;
