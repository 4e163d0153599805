use serde::{Deserialize, Serialize};

/// Thresholds and factors for every pricing rule.
///
/// Loaded from the `[pricing]` config section; any field left out keeps
/// its default. Ages and license ages are in years.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingPolicy {
    #[serde(default = "default_min_driver_age")]
    pub min_driver_age: u32,

    #[serde(default = "default_min_license_years")]
    pub min_license_years: u32,

    /// Drivers at or below this age may only rent Compact cars
    #[serde(default = "default_young_driver_max_age")]
    pub young_driver_max_age: u32,

    #[serde(default = "default_new_license_fee_below_years")]
    pub new_license_fee_below_years: u32,

    /// Flat amount added during high season
    #[serde(default = "default_new_license_high_season_fee")]
    pub new_license_high_season_fee: f64,

    #[serde(default = "default_new_license_surcharge_below_years")]
    pub new_license_surcharge_below_years: u32,

    #[serde(default = "default_new_license_surcharge")]
    pub new_license_surcharge: f64,

    #[serde(default = "default_young_racer_max_age")]
    pub young_racer_max_age: u32,

    #[serde(default = "default_young_racer_surcharge")]
    pub young_racer_surcharge: f64,

    #[serde(default = "default_high_season_surcharge")]
    pub high_season_surcharge: f64,

    /// Discount applies to rentals strictly longer than this
    #[serde(default = "default_long_rental_min_days")]
    pub long_rental_min_days: i64,

    #[serde(default = "default_long_rental_discount")]
    pub long_rental_discount: f64,

    #[serde(default)]
    pub weekend_pricing: bool,

    #[serde(default = "default_weekend_surcharge")]
    pub weekend_surcharge: f64,

    #[serde(default = "default_round_to_whole_units")]
    pub round_to_whole_units: bool,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            min_driver_age: default_min_driver_age(),
            min_license_years: default_min_license_years(),
            young_driver_max_age: default_young_driver_max_age(),
            new_license_fee_below_years: default_new_license_fee_below_years(),
            new_license_high_season_fee: default_new_license_high_season_fee(),
            new_license_surcharge_below_years: default_new_license_surcharge_below_years(),
            new_license_surcharge: default_new_license_surcharge(),
            young_racer_max_age: default_young_racer_max_age(),
            young_racer_surcharge: default_young_racer_surcharge(),
            high_season_surcharge: default_high_season_surcharge(),
            long_rental_min_days: default_long_rental_min_days(),
            long_rental_discount: default_long_rental_discount(),
            weekend_pricing: false,
            weekend_surcharge: default_weekend_surcharge(),
            round_to_whole_units: default_round_to_whole_units(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl PricingPolicy {
    /// Multipliers that must stay strictly positive, keyed by config name
    pub fn multipliers(&self) -> [(&'static str, f64); 5] {
        [
            ("new_license_surcharge", self.new_license_surcharge),
            ("young_racer_surcharge", self.young_racer_surcharge),
            ("high_season_surcharge", self.high_season_surcharge),
            ("long_rental_discount", self.long_rental_discount),
            ("weekend_surcharge", self.weekend_surcharge),
        ]
    }
}

fn default_min_driver_age() -> u32 {
    18
}

fn default_min_license_years() -> u32 {
    1
}

fn default_young_driver_max_age() -> u32 {
    21
}

fn default_new_license_fee_below_years() -> u32 {
    3
}

fn default_new_license_high_season_fee() -> f64 {
    15.0
}

fn default_new_license_surcharge_below_years() -> u32 {
    2
}

fn default_new_license_surcharge() -> f64 {
    1.3
}

fn default_young_racer_max_age() -> u32 {
    25
}

fn default_young_racer_surcharge() -> f64 {
    1.5
}

fn default_high_season_surcharge() -> f64 {
    1.15
}

fn default_long_rental_min_days() -> i64 {
    10
}

fn default_long_rental_discount() -> f64 {
    0.9
}

fn default_weekend_surcharge() -> f64 {
    1.05
}

fn default_round_to_whole_units() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let policy: PricingPolicy = toml::from_str(
            r#"
            weekend_pricing = true
            high_season_surcharge = 1.2
            "#,
        )
        .unwrap();

        assert!(policy.weekend_pricing);
        assert_eq!(policy.high_season_surcharge, 1.2);
        assert_eq!(policy.min_driver_age, 18);
        assert_eq!(policy.long_rental_discount, 0.9);
        assert!(policy.round_to_whole_units);
    }
}
