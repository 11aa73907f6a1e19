//! Crossing detection logic
//!
//! Determines when a taker may trade against a resting order based on
//! price compatibility.

use types::numeric::Price;
use types::order::Side;

/// Check whether a taker crosses a resting order's price
///
/// A Buy taker crosses any resting Sell priced at or below its limit; a
/// Sell taker crosses any resting Buy priced at or above its limit.
pub fn crosses(taker_side: Side, taker_price: Price, resting_price: Price) -> bool {
    match taker_side {
        Side::BUY => taker_price >= resting_price,
        Side::SELL => taker_price <= resting_price,
    }
}
