//! Date and car-type classifiers feeding the pricing rules.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::pricing::models::{CarClass, Season, VALID_CAR_CLASSES};

/// First month of high season (April, 1-indexed)
const HIGH_SEASON_START: u32 = 4;
/// Last month of high season (October, 1-indexed)
const HIGH_SEASON_END: u32 = 10;

/// Exact, case-sensitive match against the known classes.
pub fn classify_car_type(raw: &str) -> CarClass {
    VALID_CAR_CLASSES
        .iter()
        .copied()
        .find(|class| class.as_str() == raw)
        .unwrap_or(CarClass::Unknown)
}

/// Rental length in days, counting both the pickup and the dropoff day.
/// Argument order does not matter.
pub fn rental_duration_days(pickup: NaiveDate, dropoff: NaiveDate) -> i64 {
    dropoff.signed_duration_since(pickup).num_days().abs() + 1
}

fn is_high_season_month(month: u32) -> bool {
    (HIGH_SEASON_START..=HIGH_SEASON_END).contains(&month)
}

/// Low season when the pickup month is after October and the dropoff month
/// is before April (taken as given, in argument order), or when no calendar
/// month touched by the rental falls inside April..=October.
pub fn classify_season(pickup: NaiveDate, dropoff: NaiveDate) -> Season {
    if pickup.month() > HIGH_SEASON_END && dropoff.month() < HIGH_SEASON_START {
        return Season::Low;
    }

    let (start, end) = ordered(pickup, dropoff);

    let months_spanned = (end.year() - start.year()) * 12 + end.month() as i32
        - start.month() as i32;

    // a year or more always crosses April..=October
    if months_spanned >= 12 {
        return Season::High;
    }

    let touches_high_season = (0..=months_spanned).any(|offset| {
        let month = (start.month0() as i32 + offset) % 12 + 1;
        is_high_season_month(month as u32)
    });

    if touches_high_season {
        Season::High
    } else {
        Season::Low
    }
}

/// True when at least one day of the inclusive range is a Saturday or Sunday.
pub fn classify_weekend(pickup: NaiveDate, dropoff: NaiveDate) -> bool {
    if rental_duration_days(pickup, dropoff) >= 7 {
        return true;
    }

    let (start, end) = ordered(pickup, dropoff);
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .any(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
