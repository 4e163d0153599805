//! Eligibility rules and price adjustments.
//!
//! Each rule is a small policy step. The engine runs eligibility rules in
//! order until one rejects, then folds the adjustments over the running
//! price, each seeing the value left by the previous one.

use crate::pricing::classify::{
    classify_car_type, classify_season, classify_weekend, rental_duration_days,
};
use crate::pricing::models::{CarClass, Rejection, RentalRequest, Season};
use crate::pricing::policy::PricingPolicy;

/// Facts derived once per evaluation and shared by every rule
#[derive(Debug, Clone)]
pub struct QuoteContext<'a> {
    pub request: &'a RentalRequest,
    pub car_class: CarClass,
    pub rental_days: i64,
    pub season: Season,
    pub includes_weekend: bool,
}

impl<'a> QuoteContext<'a> {
    pub fn new(request: &'a RentalRequest) -> Self {
        Self {
            request,
            car_class: classify_car_type(&request.car_type),
            rental_days: rental_duration_days(request.pickup_date, request.dropoff_date),
            season: classify_season(request.pickup_date, request.dropoff_date),
            includes_weekend: classify_weekend(request.pickup_date, request.dropoff_date),
        }
    }

    pub fn driver_age(&self) -> u32 {
        self.request.driver_age
    }

    pub fn license_age(&self) -> Option<u32> {
        self.request.driver_license_age
    }

    pub fn is_high_season(&self) -> bool {
        self.season == Season::High
    }
}

pub trait EligibilityRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Some` rejects the request; remaining rules are skipped.
    fn check(&self, ctx: &QuoteContext<'_>) -> Option<Rejection>;
}

pub trait PriceAdjustment: Send + Sync {
    fn name(&self) -> &'static str;

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool;

    fn adjust(&self, running: f64) -> f64;

    fn apply(&self, ctx: &QuoteContext<'_>, running: f64) -> f64 {
        if self.applies(ctx) {
            self.adjust(running)
        } else {
            running
        }
    }
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

pub struct MinimumDriverAge {
    pub min_age: u32,
}

impl EligibilityRule for MinimumDriverAge {
    fn name(&self) -> &'static str {
        "minimum_driver_age"
    }

    fn check(&self, ctx: &QuoteContext<'_>) -> Option<Rejection> {
        (ctx.driver_age() < self.min_age).then_some(Rejection::DriverTooYoung)
    }
}

/// Only enforced when the request carries a license age.
pub struct MinimumLicenseAge {
    pub min_years: u32,
}

impl EligibilityRule for MinimumLicenseAge {
    fn name(&self) -> &'static str {
        "minimum_license_age"
    }

    fn check(&self, ctx: &QuoteContext<'_>) -> Option<Rejection> {
        match ctx.license_age() {
            Some(years) if years < self.min_years => Some(Rejection::LicenseTooNew),
            _ => None,
        }
    }
}

pub struct YoungDriverCompactOnly {
    pub max_age: u32,
}

impl EligibilityRule for YoungDriverCompactOnly {
    fn name(&self) -> &'static str {
        "young_driver_compact_only"
    }

    fn check(&self, ctx: &QuoteContext<'_>) -> Option<Rejection> {
        (ctx.driver_age() <= self.max_age && ctx.car_class != CarClass::Compact)
            .then_some(Rejection::CompactOnly)
    }
}

// ---------------------------------------------------------------------------
// Adjustments
// ---------------------------------------------------------------------------

/// Flat fee for recent license holders during high season
pub struct NewLicenseHighSeasonFee {
    pub below_years: u32,
    pub fee: f64,
}

impl PriceAdjustment for NewLicenseHighSeasonFee {
    fn name(&self) -> &'static str {
        "new_license_high_season_fee"
    }

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool {
        ctx.is_high_season() && ctx.license_age().is_some_and(|years| years < self.below_years)
    }

    fn adjust(&self, running: f64) -> f64 {
        running + self.fee
    }
}

pub struct NewLicenseSurcharge {
    pub below_years: u32,
    pub factor: f64,
}

impl PriceAdjustment for NewLicenseSurcharge {
    fn name(&self) -> &'static str {
        "new_license_surcharge"
    }

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool {
        ctx.license_age().is_some_and(|years| years < self.below_years)
    }

    fn adjust(&self, running: f64) -> f64 {
        running * self.factor
    }
}

/// Racer surcharge for young drivers. Fires in high season only.
pub struct YoungRacerSurcharge {
    pub max_age: u32,
    pub factor: f64,
}

impl PriceAdjustment for YoungRacerSurcharge {
    fn name(&self) -> &'static str {
        "young_racer_surcharge"
    }

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool {
        ctx.car_class == CarClass::Racer
            && ctx.driver_age() <= self.max_age
            && ctx.is_high_season()
    }

    fn adjust(&self, running: f64) -> f64 {
        running * self.factor
    }
}

pub struct HighSeasonSurcharge {
    pub factor: f64,
}

impl PriceAdjustment for HighSeasonSurcharge {
    fn name(&self) -> &'static str {
        "high_season_surcharge"
    }

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool {
        ctx.is_high_season()
    }

    fn adjust(&self, running: f64) -> f64 {
        running * self.factor
    }
}

pub struct LongRentalDiscount {
    pub min_days: i64,
    pub factor: f64,
}

impl PriceAdjustment for LongRentalDiscount {
    fn name(&self) -> &'static str {
        "long_rental_discount"
    }

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool {
        ctx.rental_days > self.min_days && ctx.season == Season::Low
    }

    fn adjust(&self, running: f64) -> f64 {
        running * self.factor
    }
}

/// Whole-trip surcharge when any rental day falls on a weekend.
pub struct WeekendSurcharge {
    pub factor: f64,
}

impl PriceAdjustment for WeekendSurcharge {
    fn name(&self) -> &'static str {
        "weekend_surcharge"
    }

    fn applies(&self, ctx: &QuoteContext<'_>) -> bool {
        ctx.includes_weekend
    }

    fn adjust(&self, running: f64) -> f64 {
        running * self.factor
    }
}

/// Eligibility rules in evaluation order
pub fn eligibility_rules(policy: &PricingPolicy) -> Vec<Box<dyn EligibilityRule>> {
    vec![
        Box::new(MinimumDriverAge {
            min_age: policy.min_driver_age,
        }),
        Box::new(MinimumLicenseAge {
            min_years: policy.min_license_years,
        }),
        Box::new(YoungDriverCompactOnly {
            max_age: policy.young_driver_max_age,
        }),
    ]
}

/// Price adjustments in application order
pub fn price_adjustments(policy: &PricingPolicy) -> Vec<Box<dyn PriceAdjustment>> {
    let mut adjustments: Vec<Box<dyn PriceAdjustment>> = vec![
        Box::new(NewLicenseHighSeasonFee {
            below_years: policy.new_license_fee_below_years,
            fee: policy.new_license_high_season_fee,
        }),
        Box::new(NewLicenseSurcharge {
            below_years: policy.new_license_surcharge_below_years,
            factor: policy.new_license_surcharge,
        }),
        Box::new(YoungRacerSurcharge {
            max_age: policy.young_racer_max_age,
            factor: policy.young_racer_surcharge,
        }),
        Box::new(HighSeasonSurcharge {
            factor: policy.high_season_surcharge,
        }),
        Box::new(LongRentalDiscount {
            min_days: policy.long_rental_min_days,
            factor: policy.long_rental_discount,
        }),
    ];

    if policy.weekend_pricing {
        adjustments.push(Box::new(WeekendSurcharge {
            factor: policy.weekend_surcharge,
        }));
    }

    adjustments
}
