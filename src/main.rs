use std::sync::Arc;

use exchange_api::{config::Config, models, routes, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format);
    info!("Loading currency table");
    let currencies = Arc::new(models::CurrencyTable::standard());
    info!("Currency table ready with {} entries", currencies.len());
    let state = models::AppState::new(currencies);
    let app = routes::init(state, &config);
    if let Err(e) = routes::serve(app, config.listen_addr).await {
        tracing::error!("{e:?}");
        return Err(e.into());
    }
    Ok(())
}
