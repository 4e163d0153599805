//! The HTML quote form: `GET /` shows it, `POST /` quotes every car class.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    error::AppError,
    handlers::AppState,
    metrics,
    pricing::RentalRequest,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form fields, parsed by hand so bad input becomes a 400
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub pickup_date: String,
    pub dropoff_date: String,
    pub driver_age: String,
    #[serde(default)]
    pub driver_license_age: Option<String>,
}

impl QuoteForm {
    pub fn to_request(&self, car_type: &str) -> Result<RentalRequest, AppError> {
        let pickup_date = parse_date("pickupDate", &self.pickup_date)?;
        let dropoff_date = parse_date("dropoffDate", &self.dropoff_date)?;
        let driver_age = parse_years("driverAge", &self.driver_age)?;

        let mut request = RentalRequest::new(pickup_date, dropoff_date, car_type, driver_age);

        // An empty input box means the field was not filled in
        if let Some(raw) = self.driver_license_age.as_deref().filter(|s| !s.trim().is_empty()) {
            request.driver_license_age = Some(parse_years("driverLicenseAge", raw)?);
        }

        Ok(request)
    }
}

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        AppError::InvalidRequest(format!("{}: expected YYYY-MM-DD, got '{}' ({})", field, raw, e))
    })
}

pub fn parse_years(field: &str, raw: &str) -> Result<u32, AppError> {
    raw.trim().parse::<u32>().map_err(|_| {
        AppError::InvalidRequest(format!("{}: expected a whole number of years, got '{}'", field, raw))
    })
}

/// GET / — the empty form
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(state.templates.form_page())
}

/// POST / — quote the trip for every car class and render the results
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<QuoteForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let request = form
        .map_err(|e| AppError::InvalidRequest(e.body_text()))
        .and_then(|Form(form)| form.to_request(""))
        .inspect_err(|e| {
            warn!("Rejected quote form: {}", e);
            metrics::record_invalid_request("/");
        })?;

    let engine = state.engine.load();
    let quotes = engine.quote_all_classes(&request);

    for (class, quote) in &quotes {
        metrics::record_quote(*class, quote);
    }

    info!(
        pickup = %request.pickup_date,
        dropoff = %request.dropoff_date,
        driver_age = request.driver_age,
        license_age = ?request.driver_license_age,
        "Rendered quotes for {} car classes",
        quotes.len()
    );

    Ok(Html(state.templates.render_quotes(&quotes)))
}
