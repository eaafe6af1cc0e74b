use serde::{Deserialize, Serialize};

const NSE_SUFFIX: &str = ".NS";

/// Exchange region used when addressing the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    #[default]
    Us,
    In,
}

/// Guesses the market from a ticker as typed by the user.
#[must_use]
pub fn infer_market(symbol: &str) -> Market {
    let upper = symbol.trim().to_uppercase();
    if upper.ends_with(NSE_SUFFIX) || upper == "SBIN" {
        Market::In
    } else {
        Market::Us
    }
}

/// Normalizes a ticker for the given market.
#[must_use]
pub fn format_symbol(symbol: &str, market: Market) -> String {
    let upper = symbol.trim().to_uppercase();
    match market {
        Market::In if !upper.ends_with(NSE_SUFFIX) => format!("{upper}{NSE_SUFFIX}"),
        _ => upper,
    }
}
