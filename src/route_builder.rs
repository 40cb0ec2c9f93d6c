use crate::trip_route::{GeoPoint, TripEndpoints};

/// How far (in degrees, per axis) a recorded waypoint may sit from the
/// authoritative start/end before the endpoint gets spliced into the path.
/// 0.0001 degrees is roughly 11 meters.
pub const ENDPOINT_EPS: f64 = 0.0001;

fn near(a: &GeoPoint, b: &GeoPoint) -> bool {
    (a.lat - b.lat).abs() <= ENDPOINT_EPS && (a.lng - b.lng).abs() <= ENDPOINT_EPS
}

/// Builds the display path for a trip: the decoded waypoints, stitched to
/// the authoritative endpoints when the recording starts or ends short of
/// them. With no waypoints at all we fall back to a straight start-to-end
/// segment, or to nothing if the endpoints are missing too.
pub fn build_route(endpoints: &TripEndpoints, decoded: Vec<GeoPoint>) -> Vec<GeoPoint> {
    if decoded.is_empty() {
        return match (endpoints.start, endpoints.end) {
            (Some(start), Some(end)) => vec![start, end],
            _ => Vec::new(),
        };
    }

    let mut route = decoded;
    if let Some(start) = endpoints.start {
        if !near(&start, &route[0]) {
            route.insert(0, start);
        }
    }
    if let Some(end) = endpoints.end {
        let last = route[route.len() - 1];
        if !near(&end, &last) {
            route.push(end);
        }
    }
    route
}
