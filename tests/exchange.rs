use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use exchange_api::{
    config::Config,
    models::{AppState, CurrencyTable},
    routes, AppError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(Arc::new(CurrencyTable::standard()));
    routes::init(state, &Config::default())
}

async fn call(method: &str, uri: &str) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())?;
    let response = app().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

async fn get(uri: &str) -> Result<(StatusCode, Value)> {
    call("GET", uri).await
}

fn validation_failure(body: &Value) -> (&str, &str) {
    (
        body["data"]["type"].as_str().unwrap_or_default(),
        body["data"]["message"].as_str().unwrap_or_default(),
    )
}

#[tokio::test]
async fn converts_usd_to_brl() -> Result<()> {
    let (status, body) = get("/exchange/10/USD/BRL/5.2").await?;
    assert_eq!(status, StatusCode::OK);
    let value = body["valorConvertido"].as_f64().unwrap_or_default();
    assert!((value - 52.0).abs() < 1e-9);
    assert_eq!(body["simboloMoeda"], "R$");
    Ok(())
}

#[tokio::test]
async fn converts_to_every_known_currency() -> Result<()> {
    for (to, symbol) in [("USD", "$"), ("BRL", "R$"), ("EUR", "€")] {
        let (status, body) = get(&format!("/exchange/2.5/BRL/{to}/2")).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valorConvertido"].as_f64(), Some(5.0));
        assert_eq!(body["simboloMoeda"], symbol);
    }
    Ok(())
}

#[tokio::test]
async fn rejects_zero_amount() -> Result<()> {
    let (status, body) = get("/exchange/0/USD/EUR/1.1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "data": {
                "valid": false,
                "type": "number",
                "message": "Field 'amount' must be a valid number."
            },
            "status": 400
        })
    );
    Ok(())
}

#[tokio::test]
async fn rejects_non_numeric_rate() -> Result<()> {
    let (status, body) = get("/exchange/10/USD/EUR/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        validation_failure(&body),
        ("number", "Field 'rate' must be a valid number.")
    );
    Ok(())
}

#[tokio::test]
async fn rejects_short_currency_code() -> Result<()> {
    let (status, body) = get("/exchange/10/US/EUR/1.1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        validation_failure(&body),
        ("length", "Field 'from' must be 3 characters.")
    );
    Ok(())
}

#[tokio::test]
async fn rejects_unknown_currency() -> Result<()> {
    let (status, body) = get("/exchange/10/USD/XXX/1.1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        validation_failure(&body),
        ("in", "Field 'to' must be valid.")
    );
    Ok(())
}

#[tokio::test]
async fn rejects_missing_parameters() -> Result<()> {
    let cases = [
        ("/exchange", "amount"),
        ("/exchange/10", "from"),
        ("/exchange/10/USD", "to"),
        ("/exchange/10/USD/EUR", "rate"),
    ];
    for (uri, field) in cases {
        let (status, body) = get(uri).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        let expected = format!("Field '{field}' is required.");
        assert_eq!(validation_failure(&body), ("required", expected.as_str()));
    }
    Ok(())
}

#[tokio::test]
async fn unmatched_route_is_an_invalid_request() -> Result<()> {
    let (status, body) = get("/convert/10/USD/EUR/1.1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request");
    assert_eq!(body["error"], "No route found for \"GET /convert/10/USD/EUR/1.1\"");

    let (status, body) = get("/exchange/10/USD/EUR/1.1/extra").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request");
    Ok(())
}

#[tokio::test]
async fn unsupported_method_is_an_invalid_request() -> Result<()> {
    let (status, body) = call("POST", "/exchange/10/USD/EUR/1.1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request");
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.contains("Method Not Allowed")));
    Ok(())
}

#[tokio::test]
async fn overflowing_conversion_is_an_invalid_request() -> Result<()> {
    let (status, body) = get("/exchange/1e200/USD/BRL/1e200").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "message": "invalid request",
            "error": "Inf and NaN cannot be JSON encoded"
        })
    );
    Ok(())
}

#[tokio::test]
async fn serve_reports_bind_failure() -> Result<()> {
    let taken = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = taken.local_addr()?;
    match routes::serve(app(), addr).await {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::AddrInUse),
        other => anyhow::bail!("expected a bind error, got {other:?}"),
    }
    Ok(())
}
