//! Bid-ask spread listing

use exchange_core::Exchange;
use types::numeric::Price;

/// Render best bid / best ask per asset with at least one resting order
pub fn render(exchange: &Exchange) -> String {
    let mut out = String::from("Asset Bid Ask Spread (in alphabetical order):\n");
    for asset in exchange.open_assets() {
        let bid = price_or_na(exchange.highest_bid(&asset));
        let ask = price_or_na(exchange.lowest_ask(&asset));
        out.push_str(&format!(
            "{asset}: Highest Open Buy = {bid} USD and Lowest Open Sell = {ask} USD\n"
        ));
    }
    out
}

fn price_or_na(price: Option<Price>) -> String {
    match price {
        Some(price) => price.to_string(),
        None => "NA".to_string(),
    }
}
