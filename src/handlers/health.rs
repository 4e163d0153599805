use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::AppState;

/// Health check endpoint
/// Reports the pricing options of the engine currently serving quotes,
/// so a SIGHUP reload can be confirmed from outside
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let engine = state.engine.load();
    let policy = engine.policy();

    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "rental-quote",
        "version": env!("CARGO_PKG_VERSION"),
        "pricing": {
            "weekend_pricing": policy.weekend_pricing,
            "round_to_whole_units": policy.round_to_whole_units,
            "currency_symbol": policy.currency_symbol,
        },
    })))
}
