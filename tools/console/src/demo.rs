//! Reference demo dataset
//!
//! Four users, three traded assets, sixteen orders. The resulting
//! portfolios, order listings and spreads are fixed and asserted by the
//! integration tests.

use exchange_core::Exchange;
use types::errors::ExchangeError;
use types::ids::{Symbol, UserId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// Opening deposits: (user, asset, amount)
pub const DEPOSITS: [(&str, &str, i64); 6] = [
    ("Nahum", "BTC", 1000),
    ("Nahum", "USD", 100000),
    ("Dolson", "USD", 555555),
    ("Ofria", "ETH", 678),
    ("Zaabar", "USD", 12121212),
    ("Zaabar", "LTC", 4563),
];

/// Order flow: (user, side, asset, quantity, price)
pub const ORDERS: [(&str, Side, &str, i64, i64); 16] = [
    ("Nahum", Side::SELL, "BTC", 5, 1100),
    ("Nahum", Side::SELL, "BTC", 100, 1200),
    ("Nahum", Side::BUY, "BTC", 7, 800),
    ("Dolson", Side::BUY, "BTC", 1, 950),
    ("Ofria", Side::SELL, "ETH", 12, 156),
    ("Ofria", Side::SELL, "ETH", 10, 160),
    ("Zaabar", Side::SELL, "LTC", 10, 550),
    ("Zaabar", Side::BUY, "LTC", 10, 450),
    ("Nahum", Side::BUY, "LTC", 55, 600),
    ("Nahum", Side::BUY, "ETH", 30, 158),
    ("Ofria", Side::SELL, "ETH", 10, 140),
    ("Zaabar", Side::BUY, "BTC", 10, 1500),
    ("Zaabar", Side::BUY, "ETH", 200, 1255),
    ("Nahum", Side::SELL, "BTC", 30, 158),
    ("Dolson", Side::BUY, "BTC", 20, 2000),
    ("Nahum", Side::SELL, "ETH", 1, 1423),
];

/// Seed the reference dataset into an exchange
///
/// Submissions are timestamped `start`, `start + 1`, … in dataset order.
/// Every submission in the dataset is accepted.
pub fn seed_reference_dataset(exchange: &mut Exchange, start: i64) -> Result<(), ExchangeError> {
    for (user, asset, amount) in DEPOSITS {
        exchange.deposit(&UserId::new(user), &Symbol::new(asset), amount);
    }
    for (i, (user, side, asset, quantity, price)) in ORDERS.into_iter().enumerate() {
        let timestamp = start + i as i64;
        let order = Order::new(
            UserId::new(user),
            side,
            Symbol::new(asset),
            Quantity::new(quantity),
            Price::new(price),
            timestamp,
        );
        exchange.submit_order(order, timestamp)?;
    }
    Ok(())
}
