use crate::config::Config;
use crate::models::AppState;
use crate::{AppError, Result};
use axum::http::{Method, Uri};
use axum::Router;
use bytes::Bytes;
use http::{HeaderMap, Request, Response, StatusCode};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::Any;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

mod api_routes;

pub fn init(state: AppState, config: &Config) -> Router {
    let cors = tower_http::cors::CorsLayer::new().allow_methods(Any).allow_origin(Any);
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<axum::body::Body>| {
            tracing::debug_span!("http-request", method = %request.method(), path = %request.uri().path())
        })
        .on_request(|request: &Request<axum::body::Body>, _span: &Span| {
            tracing::debug!("exchange request {} {} received", request.method(), request.uri())
        })
        .on_response(|response: &Response<axum::body::Body>, latency: Duration, _span: &Span| {
            tracing::debug!("response {} generated in {:?}", response.status(), latency)
        })
        .on_body_chunk(|chunk: &Bytes, _latency: Duration, _span: &Span| {
            tracing::debug!("sending {} bytes", chunk.len())
        })
        .on_eos(|_trailers: Option<&HeaderMap>, stream_duration: Duration, _span: &Span| {
            tracing::debug!("stream closed after {:?}", stream_duration)
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!("exchange request failed after {latency:?}: {error}")
        });
    api_routes::init(state)
        .fallback(no_route)
        .method_not_allowed_fallback(no_method)
        .layer(trace)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(cors)
}

/// Binds `addr` and serves `app` until the server stops
pub async fn serve(app: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn no_route(method: Method, uri: Uri) -> AppError {
    AppError::Dispatch(format!("No route found for \"{method} {}\"", uri.path()))
}

async fn no_method(method: Method, uri: Uri) -> AppError {
    AppError::Dispatch(format!(
        "No route found for \"{method} {}\": Method Not Allowed",
        uri.path()
    ))
}
