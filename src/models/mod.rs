mod currency;
mod exchange;
pub use currency::*;
pub use exchange::*;

use std::sync::Arc;

use crate::exchange_service::ExchangeService;

/// Shared data for the request handlers
#[derive(Clone)]
pub struct AppState {
    pub exchange_service: ExchangeService,
}
impl AppState {
    /// Build the handler state around a currency table loaded once at startup
    pub fn new(currencies: Arc<CurrencyTable>) -> Self {
        Self {
            exchange_service: ExchangeService::new(currencies),
        }
    }
}
