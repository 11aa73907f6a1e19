//! Trade record
//!
//! One completed settlement step between a buyer and a seller. The executed
//! price is always the taker's limit price at the time of the step; the
//! resting side settles at the taker's quote, never its own.

use crate::ids::{Symbol, TradeId, UserId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// An executed trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub buyer: UserId,
    pub seller: UserId,
    pub asset: Symbol,
    pub quantity: Quantity,
    pub price: Price,
    pub executed_at: i64, // Unix nanos
}

impl Trade {
    /// Create a new trade
    pub fn new(
        buyer: UserId,
        seller: UserId,
        asset: Symbol,
        quantity: Quantity,
        price: Price,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            buyer,
            seller,
            asset,
            quantity,
            price,
            executed_at,
        }
    }

    /// Cash value of the trade (quantity × price)
    pub fn notional(&self) -> i64 {
        self.quantity.notional(self.price)
    }
}
