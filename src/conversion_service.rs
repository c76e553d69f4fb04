use std::sync::Arc;

use crate::models::CurrencyTable;

/// Multiplies amounts by caller-supplied rates and resolves display symbols
#[derive(Debug, Clone)]
pub struct ConversionService {
    currencies: Arc<CurrencyTable>,
}

impl ConversionService {
    pub fn new(currencies: Arc<CurrencyTable>) -> Self {
        ConversionService { currencies }
    }
    /// Raw product, no rounding to currency precision
    pub fn convert(&self, amount: f64, rate: f64) -> f64 {
        amount * rate
    }
    /// `None` for codes missing from the table
    pub fn resolve_symbol(&self, code: &str) -> Option<&str> {
        self.currencies.symbol(code)
    }
}
