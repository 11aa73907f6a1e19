//! Settlement-step planning
//!
//! One function plans a complete settlement step between a taker and its
//! chosen maker; the taker-smaller / equal / maker-smaller cases differ
//! only in which side exhausts, never in the shape of the records
//! produced.

use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::{Order, Side};
use types::trade::Trade;

/// The planned outcome of matching a taker against one chosen maker
///
/// `maker_fill` and `taker_fill` are the closed audit fragments for each
/// side's consumed portion; both carry the executed quantity at the trade
/// price. `maker_remaining` is the maker's resting quantity after the
/// step (zero means the maker leaves the book).
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub maker_id: OrderId,
    pub trade: Trade,
    pub maker_fill: Order,
    pub taker_fill: Order,
    pub maker_remaining: Quantity,
}

/// Plan one settlement step
///
/// Executed quantity is `min(taker.quantity, maker.quantity)`. The trade
/// prices at the TAKER's limit: the resting side settles at the taker's
/// quote, even when its own limit implied better economics.
pub fn plan(taker: &Order, maker: &Order, timestamp: i64) -> Settlement {
    let quantity = taker.quantity.min(maker.quantity);
    let price = taker.price;

    let (buyer, seller) = match taker.side {
        Side::BUY => (taker.user.clone(), maker.user.clone()),
        Side::SELL => (maker.user.clone(), taker.user.clone()),
    };

    let trade = Trade::new(buyer, seller, taker.asset.clone(), quantity, price, timestamp);

    let maker_fill = Order::new(
        maker.user.clone(),
        taker.side.opposite(),
        taker.asset.clone(),
        quantity,
        price,
        timestamp,
    );
    let taker_fill = Order::new(
        taker.user.clone(),
        taker.side,
        taker.asset.clone(),
        quantity,
        price,
        timestamp,
    );

    Settlement {
        maker_id: maker.order_id,
        trade,
        maker_fill,
        taker_fill,
        maker_remaining: maker.quantity - quantity,
    }
}
