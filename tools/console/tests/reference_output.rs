//! Reference dataset output checks
//!
//! Seeds the demo dataset and asserts the rendered listings byte for
//! byte. These strings pin down the observable behavior of the whole
//! pipeline: escrow bookkeeping, matching priority, trade-at-taker-price
//! settlement and fragment recording.

use console::{demo, reports};
use exchange_core::Exchange;

fn seeded() -> Exchange {
    let mut exchange = Exchange::new();
    demo::seed_reference_dataset(&mut exchange, 1708123456789000000).unwrap();
    exchange
}

#[test]
fn portfolios_match_reference() {
    let exchange = seeded();
    let expected = concat!(
        "User Portfolios (in alphabetical order):\n",
        "Dolson's Portfolio: 21 BTC, 514605 USD, \n",
        "Nahum's Portfolio: 872 BTC, 21 ETH, 10 LTC, 112924 USD, \n",
        "Ofria's Portfolio: 646 ETH, 15846 USD, \n",
        "Zaabar's Portfolio: 10 BTC, 10 ETH, 4553 LTC, 11856712 USD, \n",
    );
    assert_eq!(reports::portfolios::render(&exchange), expected);
}

#[test]
fn user_orders_match_reference() {
    let exchange = seeded();
    let expected = concat!(
        "Users Orders (in alphabetical order):\n",
        "Dolson's Open Orders (in chronological order):\n",
        "Dolson's Filled Orders (in chronological order):\n",
        "Buy 1 BTC at 158 USD by Dolson\n",
        "Buy 20 BTC at 2000 USD by Dolson\n",
        "Nahum's Open Orders (in chronological order):\n",
        "Sell 95 BTC at 1200 USD by Nahum\n",
        "Buy 45 LTC at 600 USD by Nahum\n",
        "Buy 8 ETH at 158 USD by Nahum\n",
        "Sell 2 BTC at 158 USD by Nahum\n",
        "Sell 1 ETH at 1423 USD by Nahum\n",
        "Nahum's Filled Orders (in chronological order):\n",
        "Buy 10 LTC at 600 USD by Nahum\n",
        "Buy 12 ETH at 158 USD by Nahum\n",
        "Buy 10 ETH at 140 USD by Nahum\n",
        "Sell 5 BTC at 1500 USD by Nahum\n",
        "Sell 5 BTC at 1500 USD by Nahum\n",
        "Sell 1 BTC at 158 USD by Nahum\n",
        "Buy 7 BTC at 158 USD by Nahum\n",
        "Sell 7 BTC at 158 USD by Nahum\n",
        "Sell 20 BTC at 2000 USD by Nahum\n",
        "Ofria's Open Orders (in chronological order):\n",
        "Ofria's Filled Orders (in chronological order):\n",
        "Sell 12 ETH at 158 USD by Ofria\n",
        "Sell 10 ETH at 140 USD by Ofria\n",
        "Sell 10 ETH at 1255 USD by Ofria\n",
        "Zaabar's Open Orders (in chronological order):\n",
        "Buy 10 LTC at 450 USD by Zaabar\n",
        "Buy 190 ETH at 1255 USD by Zaabar\n",
        "Zaabar's Filled Orders (in chronological order):\n",
        "Sell 10 LTC at 600 USD by Zaabar\n",
        "Buy 5 BTC at 1500 USD by Zaabar\n",
        "Buy 5 BTC at 1500 USD by Zaabar\n",
        "Buy 10 ETH at 1255 USD by Zaabar\n",
    );
    assert_eq!(reports::orders::render(&exchange), expected);
}

#[test]
fn trade_history_matches_reference() {
    let exchange = seeded();
    let expected = concat!(
        "Trade History (in chronological order):\n",
        "Nahum Bought 10 of LTC From Zaabar for 600 USD\n",
        "Nahum Bought 12 of ETH From Ofria for 158 USD\n",
        "Nahum Bought 10 of ETH From Ofria for 140 USD\n",
        "Zaabar Bought 5 of BTC From Nahum for 1500 USD\n",
        "Zaabar Bought 5 of BTC From Nahum for 1500 USD\n",
        "Zaabar Bought 10 of ETH From Ofria for 1255 USD\n",
        "Dolson Bought 1 of BTC From Nahum for 158 USD\n",
        "Nahum Bought 7 of BTC From Nahum for 158 USD\n",
        "Dolson Bought 20 of BTC From Nahum for 2000 USD\n",
    );
    assert_eq!(reports::trades::render(&exchange), expected);
}

#[test]
fn bid_ask_spread_matches_reference() {
    let exchange = seeded();
    let expected = concat!(
        "Asset Bid Ask Spread (in alphabetical order):\n",
        "BTC: Highest Open Buy = NA USD and Lowest Open Sell = 158 USD\n",
        "ETH: Highest Open Buy = 1255 USD and Lowest Open Sell = 1423 USD\n",
        "LTC: Highest Open Buy = 600 USD and Lowest Open Sell = NA USD\n",
    );
    assert_eq!(reports::spread::render(&exchange), expected);
}
