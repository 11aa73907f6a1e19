//! Trade history listing

use exchange_core::Exchange;

/// Render the trade history in execution order
pub fn render(exchange: &Exchange) -> String {
    let mut out = String::from("Trade History (in chronological order):\n");
    for trade in exchange.audit().trades() {
        out.push_str(&format!(
            "{} Bought {} of {} From {} for {} USD\n",
            trade.buyer, trade.quantity, trade.asset, trade.seller, trade.price
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{Symbol, UserId};
    use types::numeric::{Price, Quantity};
    use types::order::{Order, Side};

    #[test]
    fn test_trade_line_format() {
        let mut exchange = Exchange::new();
        exchange.deposit(&UserId::new("Zaabar"), &Symbol::new("LTC"), 10);
        exchange.deposit(&UserId::new("Nahum"), &Symbol::new("USD"), 6000);

        let sell = Order::new(
            UserId::new("Zaabar"),
            Side::SELL,
            Symbol::new("LTC"),
            Quantity::new(10),
            Price::new(550),
            0,
        );
        exchange.submit_order(sell, 0).unwrap();
        let buy = Order::new(
            UserId::new("Nahum"),
            Side::BUY,
            Symbol::new("LTC"),
            Quantity::new(10),
            Price::new(600),
            1,
        );
        exchange.submit_order(buy, 1).unwrap();

        assert_eq!(
            render(&exchange),
            "Trade History (in chronological order):\n\
             Nahum Bought 10 of LTC From Zaabar for 600 USD\n"
        );
    }
}
