pub mod classify;
pub mod engine;
pub mod models;
pub mod policy;
pub mod rules;

pub use classify::{classify_car_type, classify_season, classify_weekend, rental_duration_days};
pub use engine::{calculate_price, PricingEngine};
pub use models::{CarClass, Price, PriceQuote, Rejection, RentalRequest, Season, VALID_CAR_CLASSES};
pub use policy::PricingPolicy;
pub use rules::{EligibilityRule, PriceAdjustment, QuoteContext};
