//! Product-list state for the dashboard.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::error::ApiError;
use crate::net::types::Product;

/// Shown when a product fetch fails without a server message.
pub const PRODUCTS_FAILED_FALLBACK: &str = "無法載入商品資料";

/// Dashboard product fetch state.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProductsState {
    /// The dashboard starts fetching as soon as it mounts.
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl ProductsState {
    /// Apply a settled fetch. An expired session leaves no local error; the
    /// global expiry handling owns that notice.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Product>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = err.display_message(PRODUCTS_FAILED_FALLBACK);
            }
        }
    }

    pub fn is_empty_listing(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

/// Format a price in New Taiwan dollars, e.g. `NT$ 1,280` or `NT$ 99.5`.
///
/// Thousands are comma-grouped and at most two decimals are shown, with
/// trailing zeros dropped.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "NT$ -".to_owned();
    }
    let sign = if price < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if frac == 0 {
        format!("NT$ {sign}{whole}")
    } else if frac % 10 == 0 {
        format!("NT$ {sign}{whole}.{}", frac / 10)
    } else {
        format!("NT$ {sign}{whole}.{frac:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
