//! Portfolio listing

use exchange_core::Exchange;

/// Render every user's portfolio, users and assets alphabetical.
/// Zero balances are held in the ledger but not listed.
pub fn render(exchange: &Exchange) -> String {
    let mut out = String::from("User Portfolios (in alphabetical order):\n");
    for (user, assets) in exchange.ledger().accounts() {
        out.push_str(&format!("{user}'s Portfolio: "));
        for (asset, amount) in assets {
            if *amount != 0 {
                out.push_str(&format!("{amount} {asset}, "));
            }
        }
        out.push('\n');
    }
    out
}
