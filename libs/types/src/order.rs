//! Order record and side
//!
//! An order is a value record of five fields: owner, side, asset, quantity
//! and limit price. The `order_id` and `created_at` fields are bookkeeping
//! (in-book addressing and chronological reporting) and do not participate
//! in equality.

use crate::ids::{OrderId, Symbol, UserId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::BUY => write!(f, "Buy"),
            Side::SELL => write!(f, "Sell"),
        }
    }
}

/// A limit order
///
/// While resting or being matched, `quantity` is the unfilled remainder;
/// matching mutates it down toward zero. Fragments recorded in the audit
/// log are closed orders whose `quantity` is the executed amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub user: UserId,
    pub side: Side,
    pub asset: Symbol,
    pub quantity: Quantity,
    pub price: Price,
    pub created_at: i64, // Unix nanos
}

impl Order {
    /// Create a new order with a fresh id
    pub fn new(
        user: UserId,
        side: Side,
        asset: Symbol,
        quantity: Quantity,
        price: Price,
        timestamp: i64,
    ) -> Self {
        Self {
            order_id: OrderId::new(),
            user,
            side,
            asset,
            quantity,
            price,
            created_at: timestamp,
        }
    }
}

/// Equality is by the five value fields only: owner, side, asset, quantity
/// and price. Two distinct submissions with identical parameters compare
/// equal even though their ids differ.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
            && self.side == other.side
            && self.asset == other.asset
            && self.quantity == other.quantity
            && self.price == other.price
    }
}

impl Eq for Order {}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} at {} USD by {}",
            self.side, self.quantity, self.asset, self.price, self.user
        )
    }
}
