use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rental car classes. Anything outside the four known classes is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarClass {
    Compact,
    Electric,
    Cabrio,
    Racer,
    Unknown,
}

/// The classes a quote page is rendered for, in display order.
pub const VALID_CAR_CLASSES: [CarClass; 4] = [
    CarClass::Compact,
    CarClass::Electric,
    CarClass::Cabrio,
    CarClass::Racer,
];

impl CarClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Electric => "Electric",
            Self::Cabrio => "Cabrio",
            Self::Racer => "Racer",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    High,
    Low,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.write_str("High"),
            Self::Low => f.write_str("Low"),
        }
    }
}

/// A single quote request.
///
/// `driver_license_age` is optional: requests without it skip the
/// license eligibility check and the new-license surcharges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub car_type: String,
    pub driver_age: u32,
    pub driver_license_age: Option<u32>,
}

impl RentalRequest {
    pub fn new(
        pickup_date: NaiveDate,
        dropoff_date: NaiveDate,
        car_type: impl Into<String>,
        driver_age: u32,
    ) -> Self {
        Self {
            pickup_date,
            dropoff_date,
            car_type: car_type.into(),
            driver_age,
            driver_license_age: None,
        }
    }

    pub fn with_license_age(mut self, years: u32) -> Self {
        self.driver_license_age = Some(years);
        self
    }

    /// Same trip and driver, different car class.
    pub fn for_car_type(&self, car_type: impl Into<String>) -> Self {
        Self {
            car_type: car_type.into(),
            ..self.clone()
        }
    }
}

/// Reasons a driver cannot be quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    DriverTooYoung,
    LicenseTooNew,
    CompactOnly,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DriverTooYoung => "Driver too young - cannot quote the price",
            Self::LicenseTooNew => "Driver must hold a license for at least 1 year",
            Self::CompactOnly => "Drivers 21 y/o or less can only rent Compact vehicles",
        }
    }

    /// Stable label used in metrics and JSON responses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DriverTooYoung => "driver_too_young",
            Self::LicenseTooNew => "license_too_new",
            Self::CompactOnly => "compact_only",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A priced amount plus the symbol it is displayed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency_symbol: String,
}

impl Price {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            currency_symbol: "$".to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_symbol, self.amount)
    }
}

/// Outcome of one pricing evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriceQuote {
    Price(Price),
    Rejected(Rejection),
}

impl PriceQuote {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Price(price) => Some(price.amount),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Price(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price(price) => price.fmt(f),
            Self::Rejected(reason) => reason.fmt(f),
        }
    }
}
