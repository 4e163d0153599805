use anyhow::Result;
use colored::Colorize;
use rental_quote::{
    config,
    handlers::api::{QuoteApiResponse, QuoteEntry},
    pricing::{
        classify_car_type, classify_season, classify_weekend, rental_duration_days, CarClass,
        PriceQuote, PricingEngine, RentalRequest,
    },
};
use std::path::Path;
use tracing::info;

use crate::cli::QuoteArgs;

/// Execute the quote command
///
/// Prices the trip with the configured policy and prints one line per class
pub fn execute(config_path: &Path, args: &QuoteArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let engine = PricingEngine::new(cfg.pricing);

    let quotes = quote_trip(&engine, args);
    info!("Computed {} quotes", quotes.len());

    if args.json {
        let response = QuoteApiResponse {
            quotes: quotes
                .iter()
                .map(|(class, quote)| QuoteEntry::new(*class, quote))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let days = rental_duration_days(args.pickup, args.dropoff);
    let season = classify_season(args.pickup, args.dropoff);

    println!("{}", "Trip:".bold());
    println!("  {}: {} → {}", "Dates".cyan(), args.pickup, args.dropoff);
    println!("  {}: {} ({} season)", "Days".cyan(), days, season);
    if engine.policy().weekend_pricing {
        println!(
            "  {}: {}",
            "Weekend".cyan(),
            if classify_weekend(args.pickup, args.dropoff) { "yes" } else { "no" }
        );
    }
    match args.license_age {
        Some(years) => println!("  {}: {} (license {} years)", "Driver".cyan(), args.age, years),
        None => println!("  {}: {}", "Driver".cyan(), args.age),
    }
    println!();

    println!("{}", "Quotes:".bold());
    for (class, quote) in &quotes {
        let line = match quote {
            PriceQuote::Price(_) => quote.to_string().green(),
            PriceQuote::Rejected(_) => quote.to_string().red(),
        };
        println!("  {:<10} {}", class.as_str(), line);
    }

    Ok(())
}

fn quote_trip(engine: &PricingEngine, args: &QuoteArgs) -> Vec<(CarClass, PriceQuote)> {
    let mut request = RentalRequest::new(
        args.pickup,
        args.dropoff,
        args.car_type.clone().unwrap_or_default(),
        args.age,
    );
    request.driver_license_age = args.license_age;

    match &args.car_type {
        Some(car_type) => vec![(classify_car_type(car_type), engine.calculate_price(&request))],
        None => engine.quote_all_classes(&request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args(car_type: Option<&str>) -> QuoteArgs {
        QuoteArgs {
            pickup: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            dropoff: NaiveDate::from_ymd_opt(2020, 5, 4).unwrap(),
            age: 25,
            license_age: Some(20),
            car_type: car_type.map(str::to_string),
            json: false,
        }
    }

    #[test]
    fn test_quote_single_class() {
        let quotes = quote_trip(&PricingEngine::default(), &args(Some("Racer")));
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].0, CarClass::Racer);
        assert_eq!(quotes[0].1.to_string(), "$173");
    }

    #[test]
    fn test_quote_all_classes() {
        let quotes = quote_trip(&PricingEngine::default(), &args(None));
        assert_eq!(quotes.len(), 4);
        assert_eq!(quotes[0].1.to_string(), "$115");
    }
}
