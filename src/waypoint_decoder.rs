use serde_json::Value;

use crate::trip_route::GeoPoint;

// Some clients record coordinates as numeric strings instead of numbers, so
// we coerce both. Anything non-finite is rejected.
fn coerce_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if n.is_finite() {
        Some(n)
    } else {
        None
    }
}

pub(crate) fn point_of_value(value: &Value) -> Option<GeoPoint> {
    let lat = coerce_f64(value.get("lat")?)?;
    let lng = coerce_f64(value.get("lng")?)?;
    Some(GeoPoint { lat, lng })
}

/// Decodes the raw waypoint payload attached to a trip record into an
/// ordered list of points.
///
/// The payload arrives in one of three shapes: an array of point objects, a
/// JSON string encoding that array, or a JSON string encoding that string
/// (some clients serialize an already-serialized value). Anything else
/// decodes to an empty list, and malformed elements are dropped
/// individually. This never fails: the map view must always get something it
/// can render.
pub fn decode(raw: Option<&Value>) -> Vec<GeoPoint> {
    let raw = match raw {
        None | Some(Value::Null) => return Vec::new(),
        Some(value) => value,
    };

    // unwrap up to two layers of string encoding; the payload itself is read
    // in place, only parsed inner values are owned
    let mut unwrapped: Option<Value> = None;
    for _ in 0..2 {
        match unwrapped.as_ref().unwrap_or(raw) {
            Value::String(s) => match serde_json::from_str(s) {
                Ok(parsed) => unwrapped = Some(parsed),
                Err(err) => {
                    warn!("unparseable waypoint payload: {err}");
                    return Vec::new();
                }
            },
            _ => break,
        }
    }

    match unwrapped.as_ref().unwrap_or(raw) {
        Value::Array(elements) => elements.iter().filter_map(point_of_value).collect(),
        _ => Vec::new(),
    }
}
