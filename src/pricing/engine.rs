use tracing::debug;

use crate::pricing::models::{CarClass, Price, PriceQuote, RentalRequest, VALID_CAR_CLASSES};
use crate::pricing::policy::PricingPolicy;
use crate::pricing::rules::{
    eligibility_rules, price_adjustments, EligibilityRule, PriceAdjustment, QuoteContext,
};

/// Evaluates rental requests against an ordered list of pricing rules.
///
/// The engine holds no mutable state; one instance can serve any number
/// of concurrent evaluations.
pub struct PricingEngine {
    policy: PricingPolicy,
    eligibility: Vec<Box<dyn EligibilityRule>>,
    adjustments: Vec<Box<dyn PriceAdjustment>>,
}

impl PricingEngine {
    /// Build the standard rule list for a policy
    pub fn new(policy: PricingPolicy) -> Self {
        let eligibility = eligibility_rules(&policy);
        let adjustments = price_adjustments(&policy);
        Self::with_rules(policy, eligibility, adjustments)
    }

    /// Build an engine from an explicit rule list
    pub fn with_rules(
        policy: PricingPolicy,
        eligibility: Vec<Box<dyn EligibilityRule>>,
        adjustments: Vec<Box<dyn PriceAdjustment>>,
    ) -> Self {
        Self {
            policy,
            eligibility,
            adjustments,
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Quote one request. Rejections are returned as values, never errors.
    pub fn calculate_price(&self, request: &RentalRequest) -> PriceQuote {
        let ctx = QuoteContext::new(request);

        for rule in &self.eligibility {
            if let Some(rejection) = rule.check(&ctx) {
                debug!(
                    rule = rule.name(),
                    car_class = %ctx.car_class,
                    driver_age = request.driver_age,
                    "Request rejected: {}",
                    rejection
                );
                return PriceQuote::Rejected(rejection);
            }
        }

        // The per-day minimum rate equals the driver's age
        let base = f64::from(request.driver_age) * ctx.rental_days as f64;

        let mut amount = self
            .adjustments
            .iter()
            .fold(base, |running, adjustment| adjustment.apply(&ctx, running));

        if self.policy.round_to_whole_units {
            amount = amount.round();
        }

        debug!(
            car_class = %ctx.car_class,
            season = %ctx.season,
            rental_days = ctx.rental_days,
            base,
            amount,
            "Quote computed"
        );

        PriceQuote::Price(Price {
            amount,
            currency_symbol: self.policy.currency_symbol.clone(),
        })
    }

    /// Quote the same trip for every known car class
    pub fn quote_all_classes(&self, request: &RentalRequest) -> Vec<(CarClass, PriceQuote)> {
        VALID_CAR_CLASSES
            .iter()
            .map(|class| {
                let quote = self.calculate_price(&request.for_car_type(class.as_str()));
                (*class, quote)
            })
            .collect()
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}

/// Quote a request with the default policy
pub fn calculate_price(request: &RentalRequest) -> PriceQuote {
    PricingEngine::default().calculate_price(request)
}
