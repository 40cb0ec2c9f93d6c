#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Authoritative start/end of a trip, as confirmed by the trip service.
/// Either may be missing (e.g. a trip that was never properly ended).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TripEndpoints {
    pub start: Option<GeoPoint>,
    pub end: Option<GeoPoint>,
}
