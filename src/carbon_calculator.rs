use std::collections::HashMap;

use crate::transport_mode::TransportMode;

/// Baseline: what the same distance would emit in a private car (g CO₂/km).
/// Savings are always measured against this.
pub const CAR_CARBON_RATE: f64 = 120.0;

/// Green points granted per gram of CO₂ saved.
pub const POINTS_PER_GRAM: f64 = 0.5;

// Per-kilometer fare increment of a motorized ride not taken.
const MONEY_SAVED_PER_KM: f64 = 0.55;

lazy_static! {
    /// Carbon emission rates per transport mode (g CO₂/km).
    static ref CARBON_RATES: HashMap<TransportMode, f64> = HashMap::from([
        (TransportMode::Walk, 0.0),
        (TransportMode::Cycle, 0.0),
        (TransportMode::Bus, 50.0),
        (TransportMode::Mixed, 30.0),
    ]);
}

// The table covers every variant today; a variant added without a rate gets
// the mixed rate, same as an unrecognized mode string.
fn rate(mode: TransportMode) -> f64 {
    *CARBON_RATES
        .get(&mode)
        .unwrap_or(&CARBON_RATES[&TransportMode::Mixed])
}

// Trip distances come straight out of service JSON, so they can be negative
// or not even a number. Treat anything unusable as an empty trip.
fn clamp_distance(distance_km: f64) -> f64 {
    if distance_km.is_finite() && distance_km > 0.0 {
        distance_km
    } else {
        0.0
    }
}

/// Carbon emitted by the trip itself, in grams. Never negative.
pub fn emission(mode: TransportMode, distance_km: f64) -> f64 {
    rate(mode) * clamp_distance(distance_km)
}

/// Carbon saved compared to driving the same distance, in grams. Never
/// negative, even for a mode dirtier than the baseline.
pub fn savings(mode: TransportMode, distance_km: f64) -> f64 {
    let distance_km = clamp_distance(distance_km);
    (CAR_CARBON_RATE * distance_km - emission(mode, distance_km)).max(0.0)
}

/// Green points for a given carbon saving. Half-grams round up.
pub fn points(savings_grams: f64) -> i32 {
    (savings_grams * POINTS_PER_GRAM).round() as i32
}

/// Money not spent on a motorized ride, proportional to distance.
pub fn money_saved(distance_km: f64) -> f64 {
    MONEY_SAVED_PER_KM * clamp_distance(distance_km)
}

/// Qualitative rating tiers, ordered least to most eco-friendly so `Ord`
/// agrees with "more savings never ranks lower".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EcoRating {
    Standard,
    LowCarbon,
    Eco,
    VeryEco,
    SuperEco,
}

impl EcoRating {
    pub fn label(&self) -> &'static str {
        match self {
            EcoRating::SuperEco => "Super eco-friendly",
            EcoRating::VeryEco => "Very eco-friendly",
            EcoRating::Eco => "Eco-friendly",
            EcoRating::LowCarbon => "Low-carbon",
            EcoRating::Standard => "Standard",
        }
    }
}

/// Rating thresholds in grams saved, highest tier first. Boundary values
/// resolve to the higher tier. `Standard` is the floor below every tier and
/// the only rating not listed here. Tuning a tier means editing this table,
/// not the lookup below.
const ECO_RATING_TIERS: [(f64, EcoRating); 4] = [
    (150.0, EcoRating::SuperEco),
    (80.0, EcoRating::VeryEco),
    (50.0, EcoRating::Eco),
    (0.0, EcoRating::LowCarbon),
];

pub fn eco_rating(savings_grams: f64) -> EcoRating {
    // zero, negative, and NaN savings all sit below every tier
    if !(savings_grams > 0.0) {
        return EcoRating::Standard;
    }
    ECO_RATING_TIERS
        .iter()
        .find(|(threshold, _)| savings_grams >= *threshold)
        .map_or(EcoRating::Standard, |(_, rating)| *rating)
}

/// Everything the reward pipeline derives from a single trip.
#[derive(Clone, Debug, PartialEq)]
pub struct TripMetrics {
    pub emission_grams: f64,
    pub savings_grams: f64,
    pub points: i32,
    pub money_saved: f64,
}

impl TripMetrics {
    pub fn compute(mode: TransportMode, distance_km: f64) -> Self {
        let emission_grams = emission(mode, distance_km);
        let savings_grams = savings(mode, distance_km);
        TripMetrics {
            emission_grams,
            savings_grams,
            points: points(savings_grams),
            money_saved: money_saved(distance_km),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{rate, CARBON_RATES, ECO_RATING_TIERS};
    use crate::transport_mode::TransportMode;
    use strum::IntoEnumIterator;

    #[test]
    fn rate_table_is_total() {
        for mode in TransportMode::iter() {
            assert!(CARBON_RATES.contains_key(&mode), "no rate for {mode:?}");
        }
        assert_eq!(rate(TransportMode::Bus), 50.0);
    }

    #[test]
    fn tier_table_is_descending() {
        for pair in ECO_RATING_TIERS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }
}
