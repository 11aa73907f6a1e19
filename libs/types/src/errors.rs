//! Error taxonomy for the exchange
//!
//! Typed rejection reasons using thiserror. Every operation either fully
//! applies its effect or applies none of it; callers that only care about
//! the original accept/reject contract use the `Result::is_ok()`
//! projection.

use thiserror::Error;

/// Ledger rejection reasons
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown account: {user}")]
    UnknownAccount { user: String },

    #[error("account {user} holds no {asset}")]
    UnknownAsset { user: String, asset: String },

    #[error("insufficient {asset} for {user}: required {required}, available {available}")]
    InsufficientBalance {
        user: String,
        asset: String,
        required: i64,
        available: i64,
    },
}

/// Top-level submission error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("ledger rejection: {0}")]
    Ledger(#[from] LedgerError),

    #[error("invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    #[error("invalid price: {price}")]
    InvalidPrice { price: i64 },

    #[error("order not found in book: {order_id}")]
    OrderNotFound { order_id: String },
}
