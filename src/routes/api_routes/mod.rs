use crate::models::{AppState, ConversionResult, ExchangeParams};
use crate::{AppError, Result};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

/// Trailing segments may be omitted, they then fail the `required` rule
pub fn init(state: AppState) -> Router {
    Router::new()
        .route("/exchange", get(exchange_without_params))
        .route("/exchange/{amount}", get(exchange))
        .route("/exchange/{amount}/{from}", get(exchange))
        .route("/exchange/{amount}/{from}/{to}", get(exchange))
        .route("/exchange/{amount}/{from}/{to}/{rate}", get(exchange))
        .with_state(state)
}

async fn exchange(
    State(state): State<AppState>,
    params: core::result::Result<Path<ExchangeParams>, PathRejection>,
) -> Result<Json<ConversionResult>> {
    let Path(params) = params.map_err(|e| AppError::Dispatch(e.body_text()))?;
    state.exchange_service.exchange(&params).map(Json)
}

async fn exchange_without_params(State(state): State<AppState>) -> Result<Json<ConversionResult>> {
    state
        .exchange_service
        .exchange(&ExchangeParams::default())
        .map(Json)
}
