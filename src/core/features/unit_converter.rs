use crate::shared::error::ConversionError;
use crate::shared::types::{ConversionKind, ConversionResult};
use tracing::debug;

pub mod format;
pub mod state;

// ============================================================================
// Rate Table
// ============================================================================

/// Multiplicative constants for the scale-factor (distance) conversions.
/// The two values are independently rounded, not exact reciprocals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRates {
    pub km_to_mi: f64,
    pub mi_to_km: f64,
}

pub const CONVERSION_RATES: ConversionRates = ConversionRates {
    km_to_mi: 0.621371,
    mi_to_km: 1.60934,
};

impl ConversionKind {
    /// Scale factor, `None` for the affine temperature conversions
    pub fn rate(&self) -> Option<f64> {
        match self {
            ConversionKind::KmToMi => Some(CONVERSION_RATES.km_to_mi),
            ConversionKind::MiToKm => Some(CONVERSION_RATES.mi_to_km),
            ConversionKind::CToF | ConversionKind::FToC => None,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// True iff the trimmed text is non-empty and parses as a finite number.
pub fn is_valid_input(text: &str) -> bool {
    parse_input(text).is_ok()
}

/// Parse user text into a finite number
pub fn parse_input(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidNumber);
    }

    // f64::from_str also accepts "inf" and "NaN", which are not numbers here
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidNumber),
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Apply `kind` to `value`. Pure; no rounding.
pub fn perform_conversion(value: f64, kind: ConversionKind) -> ConversionResult {
    let result = match kind {
        ConversionKind::KmToMi => value * CONVERSION_RATES.km_to_mi,
        ConversionKind::MiToKm => value * CONVERSION_RATES.mi_to_km,
        ConversionKind::CToF => celsius_to_fahrenheit(value),
        ConversionKind::FToC => fahrenheit_to_celsius(value),
    };
    let (from_unit, to_unit) = kind.units();

    ConversionResult {
        original_value: value,
        result,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        conversion_rate: kind.rate(),
    }
}

// Multiply-first is exact at the reference points (0, 32, 100, 212, -40) but
// the intermediate overflows near f64::MAX; divide first in that case.
fn celsius_to_fahrenheit(value: f64) -> f64 {
    let result = (value * 9.0 / 5.0) + 32.0;
    if result.is_finite() {
        result
    } else {
        value / 5.0 * 9.0 + 32.0
    }
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    let result = (value - 32.0) * 5.0 / 9.0;
    if result.is_finite() {
        result
    } else {
        (value - 32.0) / 9.0 * 5.0
    }
}

/// Validate, apply the mode's sign policy, then convert.
pub fn convert_text(text: &str, kind: ConversionKind) -> Result<ConversionResult, ConversionError> {
    let value = parse_input(text)?;
    kind.mode().check_value(value)?;

    let result = perform_conversion(value, kind);
    debug!(%kind, value, result = result.result, "conversion performed");
    Ok(result)
}
