use serde::Deserialize;

/// Storefront knobs supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopConfig {
    /// Symbol prefixed to formatted prices.
    pub currency_symbol: String,
    /// Order total (smallest currency unit) at which delivery becomes
    /// free; `None` disables the offer.
    pub free_delivery_threshold: Option<u64>,
    /// Days within which a return is accepted.
    pub return_window_days: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            free_delivery_threshold: Some(10_000),
            return_window_days: 7,
        }
    }
}

impl ShopConfig {
    /// Format a price held in the smallest currency unit, e.g. `$30.00`.
    pub fn format_price(&self, amount: u64) -> String {
        format!("{}{}.{:02}", self.currency_symbol, amount / 100, amount % 100)
    }

    pub fn qualifies_for_free_delivery(&self, total: u64) -> bool {
        self.free_delivery_threshold.is_some_and(|t| total >= t)
    }
}
