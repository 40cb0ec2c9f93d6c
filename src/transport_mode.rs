use std::str::FromStr;

use strum_macros::{EnumIter, EnumString};

/// Transport mode detected for a recorded trip.
///
/// The private-car baseline used for savings comparison is not a variant
/// here. It is never a valid mode for a recorded trip, see
/// `carbon_calculator::CAR_CARBON_RATE`.
#[derive(Copy, Clone, Debug, EnumIter, EnumString, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum TransportMode {
    Walk,
    Cycle,
    Bus,
    Mixed,
}

impl TransportMode {
    /// Parses the detection service's mode string ("WALK", "bus", ...). The
    /// detector is free to emit labels we don't know about yet. Those trips
    /// are treated as mixed-mode rather than rejected.
    pub fn of_service_str(s: Option<&str>) -> Self {
        s.and_then(|s| TransportMode::from_str(s.trim()).ok())
            .unwrap_or(TransportMode::Mixed)
    }
}

#[cfg(test)]
mod tests {
    use super::TransportMode;
    use strum::IntoEnumIterator;

    #[test]
    fn service_str_conversion() {
        for mode in TransportMode::iter() {
            let label = format!("{mode:?}").to_uppercase();
            assert_eq!(TransportMode::of_service_str(Some(&label)), mode);
        }
        assert_eq!(TransportMode::of_service_str(None), TransportMode::Mixed);
        assert_eq!(
            TransportMode::of_service_str(Some("HOVERBOARD")),
            TransportMode::Mixed
        );
    }
}
