/// End-to-end pricing scenarios against the default policy
use chrono::NaiveDate;
use rental_quote::pricing::{
    calculate_price, classify_car_type, classify_season, rental_duration_days, CarClass,
    PriceQuote, PricingEngine, PricingPolicy, Rejection, RentalRequest, Season,
    VALID_CAR_CLASSES,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn quote(pickup: &str, dropoff: &str, car: &str, age: u32, license: u32) -> String {
    let request = RentalRequest::new(date(pickup), date(dropoff), car, age).with_license_age(license);
    calculate_price(&request).to_string()
}

#[test]
fn test_minimum_price_per_day_is_driver_age() {
    assert_eq!(quote("2020-01-01", "2020-01-04", "Compact", 50, 20), "$200");
    assert_eq!(quote("2020-01-01", "2020-01-04", "Compact", 30, 20), "$120");
}

#[test]
fn test_under_18_cannot_rent() {
    assert_eq!(
        quote("2020-01-01", "2020-01-04", "Compact", 17, 20),
        "Driver too young - cannot quote the price"
    );
}

#[test]
fn test_18_to_21_compact_only() {
    assert_eq!(quote("2020-01-01", "2020-01-04", "Compact", 20, 20), "$80");
    for car in ["Electric", "Cabrio", "Racer"] {
        assert_eq!(
            quote("2020-01-01", "2020-01-04", car, 20, 20),
            "Drivers 21 y/o or less can only rent Compact vehicles"
        );
    }
}

#[test]
fn test_high_season_surcharge() {
    assert_eq!(quote("2020-05-01", "2020-05-04", "Compact", 50, 20), "$230");
}

#[test]
fn test_young_racer_surcharge_only_in_high_season() {
    assert_eq!(quote("2020-01-01", "2020-01-04", "Racer", 25, 20), "$100");
    assert_eq!(quote("2020-05-01", "2020-05-04", "Racer", 25, 20), "$173");
}

#[test]
fn test_long_rental_discount_only_in_low_season() {
    assert_eq!(quote("2020-01-01", "2020-01-20", "Compact", 50, 20), "$900");
    assert_eq!(quote("2020-05-01", "2020-05-20", "Compact", 50, 20), "$1150");
}

#[test]
fn test_license_under_one_year_rejected() {
    let result = quote("2020-01-01", "2020-01-04", "Compact", 50, 0);
    assert_eq!(result, "Driver must hold a license for at least 1 year");
    assert_ne!(result, "$200");
}

#[test]
fn test_license_under_two_years_surcharge() {
    assert_eq!(quote("2020-01-01", "2020-01-04", "Compact", 50, 1), "$260");
}

#[test]
fn test_license_under_three_years_high_season_fee() {
    assert_eq!(quote("2020-05-01", "2020-05-04", "Compact", 50, 2), "$247");
}

#[test]
fn test_simple_variant_without_license_age() {
    let request = RentalRequest::new(date("2020-01-01"), date("2020-01-04"), "Compact", 50);
    assert_eq!(calculate_price(&request), PriceQuote::Price(rental_quote::pricing::Price::new(200.0)));
}

#[test]
fn test_unrounded_variant_keeps_fraction() {
    let engine = PricingEngine::new(PricingPolicy {
        round_to_whole_units: false,
        ..PricingPolicy::default()
    });
    let request = RentalRequest::new(date("2020-05-01"), date("2020-05-04"), "Racer", 25);

    let amount = engine.calculate_price(&request).amount().unwrap();
    assert!((amount - 172.5).abs() < 1e-9);
}

#[test]
fn test_classifiers_match_known_cases() {
    assert_eq!(rental_duration_days(date("2024-05-05"), date("2024-05-05")), 1);
    assert_eq!(
        rental_duration_days(date("2021-01-01"), date("2020-12-31")),
        rental_duration_days(date("2020-12-31"), date("2021-01-01"))
    );
    assert_eq!(classify_season(date("2020-11-01"), date("2021-03-31")), Season::Low);
    assert_eq!(classify_season(date("2021-01-01"), date("2021-05-01")), Season::High);

    for class in VALID_CAR_CLASSES {
        assert_eq!(classify_car_type(class.as_str()).as_str(), class.as_str());
    }
    assert_eq!(classify_car_type("unknown"), CarClass::Unknown);
}

#[test]
fn test_winter_pickup_with_earlier_dropoff_is_low_season() {
    // 304 days, no high season fee, long rental discount applies
    assert_eq!(quote("2021-12-01", "2021-02-01", "Compact", 50, 20), "$13680");
    assert_eq!(classify_season(date("2020-12-01"), date("2022-01-15")), Season::Low);
}

#[test]
fn test_rejections_short_circuit_in_order() {
    let engine = PricingEngine::default();
    let request = RentalRequest::new(date("2020-05-01"), date("2020-05-04"), "Racer", 17)
        .with_license_age(0);

    assert_eq!(
        engine.calculate_price(&request),
        PriceQuote::Rejected(Rejection::DriverTooYoung)
    );
}
