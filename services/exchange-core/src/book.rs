//! Order book
//!
//! An insertion-ordered, id-keyed store of resting orders. Arrival
//! sequence numbers preserve insertion order (which carries matching
//! priority), and every mutation goes through the order's stable id, so a
//! removal can never dangle a held reference.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use types::errors::ExchangeError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::matching::crossing;

/// Resting orders awaiting a counterparty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    /// Resting orders keyed by arrival sequence; iteration is chronological
    entries: BTreeMap<u64, Order>,
    /// Stable order id → arrival sequence
    index: HashMap<OrderId, u64>,
    next_seq: u64,
}

impl OrderBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resting order, assigning it the next arrival sequence
    pub fn insert(&mut self, order: Order) -> OrderId {
        let order_id = order.order_id;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(order_id, seq);
        self.entries.insert(seq, order);
        order_id
    }

    /// Look up a resting order by id
    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        let seq = self.index.get(order_id)?;
        self.entries.get(seq)
    }

    /// Select the best crossing counterparty for a taker
    ///
    /// The selection rule is asymmetric and deliberately preserved so:
    /// - Buy taker: the crossing Sell with the lowest price; price ties go
    ///   to the earliest-inserted order.
    /// - Sell taker: the crossing Buy with the highest price; price ties go
    ///   to the lexicographically smallest owner, then earliest insertion.
    pub fn best_counterparty(&self, taker: &Order) -> Option<&Order> {
        let candidates = self.entries.iter().filter(|(_, resting)| {
            resting.asset == taker.asset
                && resting.side == taker.side.opposite()
                && crossing::crosses(taker.side, taker.price, resting.price)
        });

        let best = match taker.side {
            Side::BUY => candidates.min_by(|(seq_a, a), (seq_b, b)| {
                a.price.cmp(&b.price).then(seq_a.cmp(seq_b))
            }),
            Side::SELL => candidates.min_by(|(seq_a, a), (seq_b, b)| {
                b.price
                    .cmp(&a.price)
                    .then_with(|| a.user.cmp(&b.user))
                    .then(seq_a.cmp(seq_b))
            }),
        };
        best.map(|(_, resting)| resting)
    }

    /// Consume `quantity` from a resting order, erasing it at zero
    ///
    /// Returns the order's remaining quantity after the fill.
    pub fn fill(&mut self, order_id: &OrderId, quantity: Quantity) -> Result<Quantity, ExchangeError> {
        let not_found = || ExchangeError::OrderNotFound {
            order_id: order_id.to_string(),
        };
        let seq = *self.index.get(order_id).ok_or_else(not_found)?;
        let entry = self.entries.get_mut(&seq).ok_or_else(not_found)?;

        assert!(
            quantity <= entry.quantity,
            "fill exceeds resting quantity"
        );
        entry.quantity -= quantity;
        let remaining = entry.quantity;

        if remaining.is_zero() {
            self.entries.remove(&seq);
            self.index.remove(order_id);
        }
        Ok(remaining)
    }

    /// Chronological iteration over resting orders
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.entries.values()
    }

    /// Number of resting orders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no orders rest
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct assets with at least one resting order, alphabetical
    pub fn open_assets(&self) -> BTreeSet<Symbol> {
        self.entries.values().map(|o| o.asset.clone()).collect()
    }

    /// Highest price among resting Buy orders for an asset
    pub fn highest_bid(&self, asset: &Symbol) -> Option<Price> {
        self.entries
            .values()
            .filter(|o| o.side == Side::BUY && &o.asset == asset)
            .map(|o| o.price)
            .max()
    }

    /// Lowest price among resting Sell orders for an asset
    pub fn lowest_ask(&self, asset: &Symbol) -> Option<Price> {
        self.entries
            .values()
            .filter(|o| o.side == Side::SELL && &o.asset == asset)
            .map(|o| o.price)
            .min()
    }
}
