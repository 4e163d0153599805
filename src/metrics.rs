use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::pricing::{CarClass, PriceQuote};

/// Install the Prometheus recorder and register metric descriptions
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "rental_quotes_total",
        "Total number of quote evaluations by car class and outcome"
    );
    describe_counter!(
        "rental_invalid_requests_total",
        "Total number of quote requests rejected at parsing"
    );
    describe_gauge!(
        "rental_quote_info",
        "Service version and build information"
    );

    gauge!("rental_quote_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// `priced` or the rejection kind
pub fn outcome_label(quote: &PriceQuote) -> &'static str {
    match quote {
        PriceQuote::Price(_) => "priced",
        PriceQuote::Rejected(reason) => reason.kind(),
    }
}

/// Record one evaluated quote
pub fn record_quote(car_class: CarClass, quote: &PriceQuote) {
    counter!(
        "rental_quotes_total",
        "car_class" => car_class.as_str(),
        "outcome" => outcome_label(quote),
    )
    .increment(1);
}

/// Record a request that failed boundary validation
pub fn record_invalid_request(endpoint: &str) {
    counter!(
        "rental_invalid_requests_total",
        "endpoint" => endpoint.to_string(),
    )
    .increment(1);
}
