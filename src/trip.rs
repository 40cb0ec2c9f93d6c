use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::carbon_calculator::{eco_rating, EcoRating, TripMetrics};
use crate::carbon_format::format_carbon;
use crate::route_builder::build_route;
use crate::transport_mode::TransportMode;
use crate::trip_route::{GeoPoint, TripEndpoints};
use crate::waypoint_decoder;

// Endpoints go through the same lenient coercion as recorded waypoints. A
// point with a missing or unusable coordinate is the same as no point.
fn lenient_point<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(waypoint_decoder::point_of_value))
}

/// A single recorded trip as served by the trip retrieval service. Only the
/// fields this crate computes from; the service sends more.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "distance", default)]
    pub distance_km: f64,
    #[serde(default)]
    pub detected_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_point")]
    pub start_point: Option<GeoPoint>,
    #[serde(default, deserialize_with = "lenient_point")]
    pub end_point: Option<GeoPoint>,
    /// Raw waypoint payload, deliberately untyped: see `waypoint_decoder`.
    #[serde(default)]
    pub polyline_points: Option<Value>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_green_trip: bool,
}

impl TripRecord {
    /// The only fallible entry point in this crate: a record that does not
    /// even deserialize is a caller bug, not a degradable payload.
    pub fn of_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn endpoints(&self) -> TripEndpoints {
        TripEndpoints {
            start: self.start_point,
            end: self.end_point,
        }
    }
}

/// Everything the trip detail view needs, computed in one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TripDisplay {
    pub mode: TransportMode,
    pub route: Vec<GeoPoint>,
    pub metrics: TripMetrics,
    pub emission_text: String,
    pub savings_text: String,
    pub eco_rating: EcoRating,
}

/// Reconstructs the route and derives all carbon/reward figures for one
/// trip. Total: every malformed part of the record degrades to the
/// documented fallback instead of failing the view.
pub fn build_trip_display(trip: &TripRecord) -> TripDisplay {
    let decoded = waypoint_decoder::decode(trip.polyline_points.as_ref());
    let route = build_route(&trip.endpoints(), decoded);

    let mode = TransportMode::of_service_str(trip.detected_mode.as_deref());
    let metrics = TripMetrics::compute(mode, trip.distance_km);
    TripDisplay {
        mode,
        route,
        emission_text: format_carbon(metrics.emission_grams),
        savings_text: format_carbon(metrics.savings_grams),
        eco_rating: eco_rating(metrics.savings_grams),
        metrics,
    }
}

// Accepted layouts for the service's timestamp strings, tried in order.
const TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Renders a service timestamp ("2026-02-10T11:30:00") as a short display
/// string ("Feb 10, 2026 11:30"). Unparseable input is shown as-is, blank
/// input as a placeholder.
pub fn format_trip_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "--".to_string();
    }
    let normalized = trimmed.replace('T', " ");
    for layout in TIME_LAYOUTS {
        if let Ok(t) = NaiveDateTime::parse_from_str(&normalized, layout) {
            return t.format("%b %-d, %Y %H:%M").to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_trip_time;

    #[test]
    fn trip_time_formatting() {
        assert_eq!(format_trip_time("2026-02-10T11:30:00"), "Feb 10, 2026 11:30");
        assert_eq!(format_trip_time("2026-02-10 11:30"), "Feb 10, 2026 11:30");
        assert_eq!(format_trip_time(""), "--");
        assert_eq!(format_trip_time("soon"), "soon");
    }
}
