//! Exchange engine
//!
//! Main coordinator for the ledger, order book and audit log. An order
//! submission is one atomic unit of work: affordability pre-check,
//! iterative matching against the book, per-step fund settlement, and
//! escrow plus book placement for any unmatched remainder. A rejected
//! submission mutates nothing.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use types::errors::{ExchangeError, LedgerError};
use types::ids::{OrderId, Symbol, UserId};
use types::numeric::Price;
use types::order::{Order, Side};
use types::trade::Trade;

use crate::audit::AuditLog;
use crate::book::OrderBook;
use crate::ledger::Ledger;
use crate::matching::settlement::{self, Settlement};

/// Cash asset symbol. Cash is an ordinary ledger asset; only the engine's
/// escrow and settlement call sites privilege it.
const CASH_ASSET: &str = "USD";

/// The exchange state machine
///
/// Owns all mutable state; there is no ambient/static state. In a
/// concurrent host, a whole `submit_order` call is the transaction
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    ledger: Ledger,
    book: OrderBook,
    audit: AuditLog,
    cash: Symbol,
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubmitOutcome {
    /// No match; the full quantity rests on the book
    Rested { order_id: OrderId },
    /// Some quantity matched; the remainder rests on the book
    PartiallyFilled { trades: Vec<Trade>, order_id: OrderId },
    /// The whole quantity matched
    Filled { trades: Vec<Trade> },
}

impl Exchange {
    /// Create an empty exchange
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            book: OrderBook::new(),
            audit: AuditLog::new(),
            cash: Symbol::new(CASH_ASSET),
        }
    }

    /// Credit a user's balance; always succeeds
    pub fn deposit(&mut self, user: &UserId, asset: &Symbol, amount: i64) {
        self.ledger.deposit(user, asset, amount);
    }

    /// Debit a user's balance
    pub fn withdraw(&mut self, user: &UserId, asset: &Symbol, amount: i64) -> Result<(), LedgerError> {
        self.ledger.withdraw(user, asset, amount)
    }

    /// Pure affordability predicate
    pub fn can_withdraw(&self, user: &UserId, asset: &Symbol, amount: i64) -> bool {
        self.ledger.can_withdraw(user, asset, amount)
    }

    /// Submit an order
    ///
    /// The pre-check is evaluated against the order's ORIGINAL quantity
    /// and price; on failure the whole order is rejected with nothing
    /// mutated. On success the order matches while a crossing counterparty
    /// exists, then any remainder is escrowed and rested. Self-matching a
    /// user's own resting order is permitted.
    pub fn submit_order(&mut self, order: Order, timestamp: i64) -> Result<SubmitOutcome, ExchangeError> {
        if order.quantity.get() <= 0 {
            return Err(ExchangeError::InvalidQuantity {
                quantity: order.quantity.get(),
            });
        }
        if order.price.get() <= 0 {
            return Err(ExchangeError::InvalidPrice {
                price: order.price.get(),
            });
        }

        let (escrow_asset, escrow_amount) = self.escrow_for(&order);
        self.ledger.check_withdrawal(&order.user, &escrow_asset, escrow_amount)?;

        debug!(
            order_id = %order.order_id,
            user = %order.user,
            side = ?order.side,
            asset = %order.asset,
            quantity = %order.quantity,
            price = %order.price,
            "order accepted"
        );

        let mut taker = order;
        let mut trades = Vec::new();

        while !taker.quantity.is_zero() {
            let step = match self.book.best_counterparty(&taker) {
                Some(maker) => settlement::plan(&taker, maker, timestamp),
                None => break,
            };
            self.execute_step(&step, taker.side)?;
            taker.quantity -= step.trade.quantity;
            trades.push(step.trade);
        }

        if taker.quantity.is_zero() {
            return Ok(SubmitOutcome::Filled { trades });
        }

        // Escrow the unmatched remainder, then rest it. The matched
        // portion was debited per step, so matched + residual equals the
        // amount the pre-check promised.
        let (escrow_asset, escrow_amount) = self.escrow_for(&taker);
        self.ledger.withdraw(&taker.user, &escrow_asset, escrow_amount)?;
        let order_id = self.book.insert(taker);

        if trades.is_empty() {
            Ok(SubmitOutcome::Rested { order_id })
        } else {
            Ok(SubmitOutcome::PartiallyFilled { trades, order_id })
        }
    }

    /// Apply one planned settlement step: move funds, consume the maker's
    /// resting quantity, append the audit records.
    fn execute_step(&mut self, step: &Settlement, taker_side: Side) -> Result<(), ExchangeError> {
        self.settle_funds(&step.trade, taker_side)?;
        let remaining = self.book.fill(&step.maker_id, step.trade.quantity)?;
        self.audit.record(step);

        debug!(
            trade_id = %step.trade.trade_id,
            buyer = %step.trade.buyer,
            seller = %step.trade.seller,
            asset = %step.trade.asset,
            quantity = %step.trade.quantity,
            price = %step.trade.price,
            maker_remaining = %remaining,
            "settlement step"
        );
        Ok(())
    }

    /// Asset and amount an order of this shape must escrow: cash at the
    /// limit price for a Buy, the asset itself for a Sell.
    fn escrow_for(&self, order: &Order) -> (Symbol, i64) {
        match order.side {
            Side::BUY => (self.cash.clone(), order.quantity.notional(order.price)),
            Side::SELL => (order.asset.clone(), order.quantity.get()),
        }
    }

    /// Move funds for one executed trade
    ///
    /// The taker pays out of live balance; the maker's contribution was
    /// escrowed at placement and is not debited here. A resting Buy that
    /// fills below its own limit forfeits the escrowed difference.
    fn settle_funds(&mut self, trade: &Trade, taker_side: Side) -> Result<(), LedgerError> {
        let cash_amount = trade.notional();
        let quantity = trade.quantity.get();
        match taker_side {
            Side::BUY => {
                self.ledger.withdraw(&trade.buyer, &self.cash, cash_amount)?;
                self.ledger.deposit(&trade.seller, &self.cash, cash_amount);
                self.ledger.deposit(&trade.buyer, &trade.asset, quantity);
            }
            Side::SELL => {
                self.ledger.withdraw(&trade.seller, &trade.asset, quantity)?;
                self.ledger.deposit(&trade.buyer, &trade.asset, quantity);
                self.ledger.deposit(&trade.seller, &self.cash, cash_amount);
            }
        }
        Ok(())
    }

    /// Balance ledger, read-only
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Order book, read-only
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Audit log, read-only
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Distinct assets with at least one resting order
    pub fn open_assets(&self) -> BTreeSet<Symbol> {
        self.book.open_assets()
    }

    /// Highest resting Buy price for an asset
    pub fn highest_bid(&self, asset: &Symbol) -> Option<Price> {
        self.book.highest_bid(asset)
    }

    /// Lowest resting Sell price for an asset
    pub fn lowest_ask(&self, asset: &Symbol) -> Option<Price> {
        self.book.lowest_ask(asset)
    }
}
