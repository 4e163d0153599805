use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::AppError,
    handlers::AppState,
    metrics,
    pricing::{classify_car_type, CarClass, PriceQuote, RentalRequest},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteApiRequest {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub driver_age: u32,
    #[serde(default)]
    pub driver_license_age: Option<u32>,
    /// Quote a single class; all classes when omitted
    #[serde(default)]
    pub car_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteApiResponse {
    pub quotes: Vec<QuoteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteEntry {
    pub car_class: CarClass,
    /// Display string: the formatted price or the rejection message
    pub quote: String,
    pub amount: Option<f64>,
    pub rejection: Option<String>,
}

impl QuoteEntry {
    pub fn new(car_class: CarClass, quote: &PriceQuote) -> Self {
        Self {
            car_class,
            quote: quote.to_string(),
            amount: quote.amount(),
            rejection: quote.rejection().map(|r| r.kind().to_string()),
        }
    }
}

/// POST /api/quote
pub async fn quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteApiRequest>, JsonRejection>,
) -> Result<Json<QuoteApiResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected quote API request: {}", e.body_text());
        metrics::record_invalid_request("/api/quote");
        AppError::InvalidRequest(e.body_text())
    })?;

    let engine = state.engine.load();

    let mut request = RentalRequest::new(
        payload.pickup_date,
        payload.dropoff_date,
        payload.car_type.clone().unwrap_or_default(),
        payload.driver_age,
    );
    request.driver_license_age = payload.driver_license_age;

    let quotes = match &payload.car_type {
        Some(car_type) => vec![(classify_car_type(car_type), engine.calculate_price(&request))],
        None => engine.quote_all_classes(&request),
    };

    for (class, quote) in &quotes {
        metrics::record_quote(*class, quote);
    }

    info!(
        car_type = ?payload.car_type,
        driver_age = request.driver_age,
        "Quote API returned {} quotes",
        quotes.len()
    );

    Ok(Json(QuoteApiResponse {
        quotes: quotes
            .iter()
            .map(|(class, quote)| QuoteEntry::new(*class, quote))
            .collect(),
    }))
}
