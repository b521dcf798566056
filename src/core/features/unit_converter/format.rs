//! Display formatting for conversion results.
//!
//! The engine returns unrounded values; rounding happens only here.

use crate::core::i18n::{t, LabelKey, Locale};
use crate::shared::types::{ConversionResult, ConverterMode};

pub const MAX_DECIMALS: usize = 12;

/// `"10.0000 km = 6.2137 mi"` with `decimals` fractional digits on both sides.
pub fn format_result(result: &ConversionResult, decimals: usize) -> String {
    format!(
        "{} {} = {} {}",
        format_value(result.original_value, decimals),
        result.from_unit,
        format_value(result.result, decimals),
        result.to_unit
    )
}

/// Fixed-point rendering, clamped to `MAX_DECIMALS`. Negative zero prints as zero.
pub fn format_value(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let formatted = format!("{:.*}", decimals, value);
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Formula line shown under the widget for a mode
pub fn formula(mode: ConverterMode, locale: Locale) -> &'static str {
    match mode {
        ConverterMode::Distance => t(locale, LabelKey::DistanceFormula),
        ConverterMode::Temperature => t(locale, LabelKey::TempFormula),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::unit_converter::perform_conversion;
    use crate::shared::types::ConversionKind;

    #[test]
    fn test_format_four_decimals() {
        let result = perform_conversion(10.0, ConversionKind::KmToMi);
        assert_eq!(format_result(&result, 4), "10.0000 km = 6.2137 mi");
    }

    #[test]
    fn test_format_temperature() {
        let result = perform_conversion(0.0, ConversionKind::CToF);
        assert_eq!(format_result(&result, 4), "0.0000 °C = 32.0000 °F");
        assert_eq!(format_result(&result, 0), "0 °C = 32 °F");
    }

    #[test]
    fn test_format_value_negative_zero() {
        assert_eq!(format_value(-0.0, 4), "0.0000");
        assert_eq!(format_value(-0.00001, 4), "0.0000");
        assert_eq!(format_value(-1.5, 1), "-1.5");
    }

    #[test]
    fn test_format_value_clamps_decimals() {
        assert_eq!(format_value(1.0, 40), format!("1.{}", "0".repeat(MAX_DECIMALS)));
    }

    #[test]
    fn test_formula_localized() {
        assert_eq!(
            formula(ConverterMode::Temperature, Locale::En),
            "°F = (°C × 9/5) + 32 | °C = (°F - 32) × 5/9"
        );
        assert!(formula(ConverterMode::Distance, Locale::Fr).contains("0,621371"));
    }
}
