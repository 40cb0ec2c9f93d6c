/// Formats a carbon amount for display: whole grams below a kilogram, one
/// decimal of kilograms from there up.
pub fn format_carbon(grams: f64) -> String {
    if grams >= 1000.0 {
        format!("{:.1}kg CO₂", grams / 1000.0)
    } else {
        format!("{grams:.0}g CO₂")
    }
}

#[cfg(test)]
mod tests {
    use super::format_carbon;

    #[test]
    fn grams_below_a_kilogram() {
        assert_eq!(format_carbon(0.0), "0g CO₂");
        assert_eq!(format_carbon(500.0), "500g CO₂");
        assert_eq!(format_carbon(999.0), "999g CO₂");
    }

    #[test]
    fn kilograms_from_1000_up() {
        assert_eq!(format_carbon(1000.0), "1.0kg CO₂");
        assert_eq!(format_carbon(1500.0), "1.5kg CO₂");
        assert_eq!(format_carbon(12340.0), "12.3kg CO₂");
    }
}
