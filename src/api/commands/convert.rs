//! Conversion command module

use tracing::debug;

use crate::core::features::unit_converter::convert_text;
use crate::core::features::unit_converter::format::{format_result, MAX_DECIMALS};
use crate::core::i18n::{t, LabelKey, Locale};
use crate::shared::errors::{CommandError, CommandResult, ERR_INVALID_DECIMALS};
use crate::shared::settings::DEFAULT_DECIMAL_PLACES;
use crate::shared::types::{
    ConversionKind, ConversionKindDTO, ConvertRequest, ConvertResponse, ConverterMode,
};

/// Validate and convert raw text in one call
///
/// Applies the same sign policy as the interactive converter: negative
/// distances are rejected, negative temperatures are not.
pub fn convert_command(request: ConvertRequest) -> CommandResult<ConvertResponse> {
    let decimals = request.decimals.unwrap_or(DEFAULT_DECIMAL_PLACES);
    if decimals > MAX_DECIMALS {
        return Err(CommandError::InvalidInput(ERR_INVALID_DECIMALS.to_string()));
    }

    let result = convert_text(&request.text, request.kind)?;
    let formatted = format_result(&result, decimals);
    debug!(kind = %request.kind, %formatted, "convert_command");

    Ok(ConvertResponse { result, formatted })
}

/// Decode a JSON request, reporting an unknown kind as `InvalidArgument`
/// rather than a generic JSON error.
pub fn decode_convert_request(payload: &str) -> CommandResult<ConvertRequest> {
    let raw: serde_json::Value = serde_json::from_str(payload)?;
    if let Some(kind) = raw.get("kind").and_then(|kind| kind.as_str()) {
        kind.parse::<ConversionKind>()?;
    }
    Ok(serde_json::from_value(raw)?)
}

/// `convert_command` for callers that hold the request as JSON text
pub fn convert_json_command(payload: &str) -> CommandResult<ConvertResponse> {
    convert_command(decode_convert_request(payload)?)
}

/// The two directions of a mode, labelled for `locale`
pub fn get_conversion_kinds_command(mode: ConverterMode, locale: Locale) -> Vec<ConversionKindDTO> {
    mode.kinds()
        .into_iter()
        .map(|kind| {
            let (from_unit, to_unit) = kind.units();
            ConversionKindDTO {
                id: kind,
                label: t(locale, LabelKey::for_kind(kind)).to_string(),
                from_unit: from_unit.to_string(),
                to_unit: to_unit.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ConversionError;

    fn request(text: &str, kind: ConversionKind) -> ConvertRequest {
        ConvertRequest { text: text.to_string(), kind, decimals: None }
    }

    #[test]
    fn test_convert_command_formats() {
        let response = convert_command(request(" 10 ", ConversionKind::MiToKm)).unwrap();
        assert_eq!(response.formatted, "10.0000 mi = 16.0934 km");
        assert_eq!(response.result.conversion_rate, Some(1.60934));
    }

    #[test]
    fn test_convert_command_custom_decimals() {
        let mut req = request("212", ConversionKind::FToC);
        req.decimals = Some(1);
        assert_eq!(convert_command(req).unwrap().formatted, "212.0 °F = 100.0 °C");
    }

    #[test]
    fn test_convert_command_rejects_bad_decimals() {
        let mut req = request("1", ConversionKind::KmToMi);
        req.decimals = Some(99);
        assert!(matches!(convert_command(req), Err(CommandError::InvalidInput(_))));
    }

    #[test]
    fn test_convert_command_errors() {
        let err = convert_command(request("", ConversionKind::KmToMi)).unwrap_err();
        assert_eq!(err.as_conversion(), Some(&ConversionError::InvalidNumber));

        let err = convert_command(request("-1", ConversionKind::MiToKm)).unwrap_err();
        assert_eq!(err.as_conversion(), Some(&ConversionError::NegativeNotAllowed));

        assert!(convert_command(request("-1", ConversionKind::FToC)).is_ok());
    }

    #[test]
    fn test_request_with_unknown_kind_fails_to_decode() {
        let err = decode_convert_request(r#"{"text":"1","kind":"lbToKg"}"#).unwrap_err();
        assert_eq!(
            err.as_conversion(),
            Some(&ConversionError::InvalidArgument("unknown conversion kind: lbToKg".into()))
        );

        let err = convert_json_command(r#"{"text":"1","kind":"lbToKg"}"#).unwrap_err();
        assert!(matches!(err, CommandError::Conversion(ConversionError::InvalidArgument(_))));

        let err = decode_convert_request("{ not json").unwrap_err();
        assert!(matches!(err, CommandError::InvalidInput(_)));
    }

    #[test]
    fn test_convert_json_command() {
        let response = convert_json_command(r#"{"text":"100","kind":"cToF","decimals":1}"#).unwrap();
        assert_eq!(response.formatted, "100.0 °C = 212.0 °F");

        let err = convert_json_command(r#"{"text":"-2","kind":"kmToMi"}"#).unwrap_err();
        assert_eq!(err.as_conversion(), Some(&ConversionError::NegativeNotAllowed));
    }

    #[test]
    fn test_conversion_kinds_for_mode() {
        let kinds = get_conversion_kinds_command(ConverterMode::Temperature, Locale::Es);
        assert_eq!(kinds.len(), 2);
        assert_eq!(kinds[0].id, ConversionKind::CToF);
        assert_eq!(kinds[0].label, "Celsius → Fahrenheit");
        assert_eq!(kinds[1].from_unit, "°F");

        let kinds = get_conversion_kinds_command(ConverterMode::Distance, Locale::Fr);
        assert_eq!(kinds[1].label, "Miles → Kilomètres");
    }
}
