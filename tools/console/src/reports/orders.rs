//! Per-user order listing

use exchange_core::Exchange;

/// Render each user's open orders and filled fragments, users
/// alphabetical, orders chronological within each section.
pub fn render(exchange: &Exchange) -> String {
    let mut out = String::from("Users Orders (in alphabetical order):\n");
    for user in exchange.ledger().users() {
        out.push_str(&format!("{user}'s Open Orders (in chronological order):\n"));
        for order in exchange.book().iter().filter(|o| &o.user == user) {
            out.push_str(&format!("{order}\n"));
        }
        out.push_str(&format!("{user}'s Filled Orders (in chronological order):\n"));
        for order in exchange.audit().fills_for(user) {
            out.push_str(&format!("{order}\n"));
        }
    }
    out
}
