use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::shared::error::ConversionError;

// ============================================================================
// Conversion Kinds & Modes
// ============================================================================

/// One of the four fixed source→target transformations.
///
/// Serialized with the wire names the widget front ends use (`"kmToMi"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "String")]
#[ts(export)]
pub enum ConversionKind {
    KmToMi,
    MiToKm,
    CToF,
    FToC,
}

impl ConversionKind {
    pub const ALL: [ConversionKind; 4] = [
        ConversionKind::KmToMi,
        ConversionKind::MiToKm,
        ConversionKind::CToF,
        ConversionKind::FToC,
    ];

    /// Wire name, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionKind::KmToMi => "kmToMi",
            ConversionKind::MiToKm => "miToKm",
            ConversionKind::CToF => "cToF",
            ConversionKind::FToC => "fToC",
        }
    }

    /// The mode whose pair contains this kind
    pub fn mode(&self) -> ConverterMode {
        match self {
            ConversionKind::KmToMi | ConversionKind::MiToKm => ConverterMode::Distance,
            ConversionKind::CToF | ConversionKind::FToC => ConverterMode::Temperature,
        }
    }

    /// (from, to) unit labels
    pub fn units(&self) -> (&'static str, &'static str) {
        match self {
            ConversionKind::KmToMi => ("km", "mi"),
            ConversionKind::MiToKm => ("mi", "km"),
            ConversionKind::CToF => ("°C", "°F"),
            ConversionKind::FToC => ("°F", "°C"),
        }
    }

    /// The other kind of the same mode
    pub fn inverse(&self) -> ConversionKind {
        match self {
            ConversionKind::KmToMi => ConversionKind::MiToKm,
            ConversionKind::MiToKm => ConversionKind::KmToMi,
            ConversionKind::CToF => ConversionKind::FToC,
            ConversionKind::FToC => ConversionKind::CToF,
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ConversionKind {
    type Err = ConversionError;

    /// Accepts `kmToMi`, `km-to-mi`, `km_to_mi` and `KM_TO_MI` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "kmtomi" => Ok(ConversionKind::KmToMi),
            "mitokm" => Ok(ConversionKind::MiToKm),
            "ctof" => Ok(ConversionKind::CToF),
            "ftoc" => Ok(ConversionKind::FToC),
            _ => Err(ConversionError::InvalidArgument(format!("unknown conversion kind: {}", s))),
        }
    }
}

impl TryFrom<String> for ConversionKind {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Measurement domain grouping two inverse conversion kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[ts(export)]
pub enum ConverterMode {
    #[default]
    Distance,
    Temperature,
}

impl ConverterMode {
    pub const ALL: [ConverterMode; 2] = [ConverterMode::Distance, ConverterMode::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConverterMode::Distance => "distance",
            ConverterMode::Temperature => "temperature",
        }
    }

    /// The mode's two kinds; the first is the default after a mode switch.
    pub fn kinds(&self) -> [ConversionKind; 2] {
        match self {
            ConverterMode::Distance => [ConversionKind::KmToMi, ConversionKind::MiToKm],
            ConverterMode::Temperature => [ConversionKind::CToF, ConversionKind::FToC],
        }
    }

    pub fn default_kind(&self) -> ConversionKind {
        self.kinds()[0]
    }

    pub fn contains(&self, kind: ConversionKind) -> bool {
        kind.mode() == *self
    }

    /// Caller-level sign policy: a distance cannot be negative, a temperature can.
    pub fn check_value(&self, value: f64) -> Result<(), ConversionError> {
        match self {
            ConverterMode::Distance if value < 0.0 => Err(ConversionError::NegativeNotAllowed),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ConverterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ConverterMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" | "d" => Ok(ConverterMode::Distance),
            "temperature" | "temp" | "t" => Ok(ConverterMode::Temperature),
            _ => Err(ConversionError::InvalidArgument(format!("unknown converter mode: {}", s))),
        }
    }
}

impl TryFrom<String> for ConverterMode {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Conversion Result
// ============================================================================

/// Outcome of a single conversion. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConversionResult {
    pub original_value: f64,
    pub result: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// Present only for scale-factor (distance) conversions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub conversion_rate: Option<f64>,
}

// ============================================================================
// Command DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertRequest {
    /// Raw user text, validated before conversion
    pub text: String,
    pub kind: ConversionKind,
    #[serde(default)]
    #[ts(optional)]
    pub decimals: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertResponse {
    pub result: ConversionResult,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConversionKindDTO {
    pub id: ConversionKind,
    pub label: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelsResponse {
    /// Locale actually used after fallback (e.g. "en" for an unsupported request)
    pub locale: String,
    pub labels: std::collections::BTreeMap<String, String>,
}
