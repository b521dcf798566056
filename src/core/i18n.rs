//! Label catalogue for the converter UI
//!
//! English, Spanish and French. Language codes resolve through `isolang`, so
//! both ISO 639-1 (`es`) and 639-3 (`spa`) work, as do region tags (`es-MX`).
//! Anything else falls back to English.

use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use crate::shared::error::ConversionError;
use crate::shared::types::{ConversionKind, ConverterMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }

    /// Resolve a language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Self::try_from_code(code).unwrap_or_default()
    }

    pub fn try_from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let language = Language::from_639_1(&primary).or_else(|| Language::from_639_3(&primary))?;
        match language {
            Language::Eng => Some(Locale::En),
            Language::Spa => Some(Locale::Es),
            Language::Fra => Some(Locale::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Title,
    Subtitle,
    Distance,
    Temperature,
    EnterValue,
    EnterNumber,
    ConversionDirection,
    Convert,
    KmToMi,
    MiToKm,
    CToF,
    FToC,
    ConversionFormulas,
    DistanceFormula,
    TempFormula,
    Idle,
    ErrorInvalid,
    ErrorPositive,
}

impl LabelKey {
    pub const ALL: [LabelKey; 18] = [
        LabelKey::Title,
        LabelKey::Subtitle,
        LabelKey::Distance,
        LabelKey::Temperature,
        LabelKey::EnterValue,
        LabelKey::EnterNumber,
        LabelKey::ConversionDirection,
        LabelKey::Convert,
        LabelKey::KmToMi,
        LabelKey::MiToKm,
        LabelKey::CToF,
        LabelKey::FToC,
        LabelKey::ConversionFormulas,
        LabelKey::DistanceFormula,
        LabelKey::TempFormula,
        LabelKey::Idle,
        LabelKey::ErrorInvalid,
        LabelKey::ErrorPositive,
    ];

    /// Catalogue key as the front ends spell it
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKey::Title => "title",
            LabelKey::Subtitle => "subtitle",
            LabelKey::Distance => "distance",
            LabelKey::Temperature => "temperature",
            LabelKey::EnterValue => "enterValue",
            LabelKey::EnterNumber => "enterNumber",
            LabelKey::ConversionDirection => "conversionDirection",
            LabelKey::Convert => "convert",
            LabelKey::KmToMi => "kmToMi",
            LabelKey::MiToKm => "miToKm",
            LabelKey::CToF => "cToF",
            LabelKey::FToC => "fToC",
            LabelKey::ConversionFormulas => "conversionFormulas",
            LabelKey::DistanceFormula => "distanceFormula",
            LabelKey::TempFormula => "tempFormula",
            LabelKey::Idle => "idle",
            LabelKey::ErrorInvalid => "errorInvalid",
            LabelKey::ErrorPositive => "errorPositive",
        }
    }

    pub fn for_kind(kind: ConversionKind) -> Self {
        match kind {
            ConversionKind::KmToMi => LabelKey::KmToMi,
            ConversionKind::MiToKm => LabelKey::MiToKm,
            ConversionKind::CToF => LabelKey::CToF,
            ConversionKind::FToC => LabelKey::FToC,
        }
    }

    pub fn for_mode(mode: ConverterMode) -> Self {
        match mode {
            ConverterMode::Distance => LabelKey::Distance,
            ConverterMode::Temperature => LabelKey::Temperature,
        }
    }

    /// `None` for caller defects, which have no user-facing label
    pub fn for_error(err: &ConversionError) -> Option<Self> {
        match err {
            ConversionError::InvalidNumber => Some(LabelKey::ErrorInvalid),
            ConversionError::NegativeNotAllowed => Some(LabelKey::ErrorPositive),
            ConversionError::InvalidArgument(_) => None,
        }
    }
}

type Catalogue = HashMap<LabelKey, &'static str>;

static CATALOGUES: Lazy<HashMap<Locale, Catalogue>> = Lazy::new(|| {
    let mut catalogues = HashMap::new();

    catalogues.insert(
        Locale::En,
        HashMap::from([
            (LabelKey::Title, "Unit Converter"),
            (LabelKey::Subtitle, "Distance and temperature, in your terminal"),
            (LabelKey::Distance, "Distance"),
            (LabelKey::Temperature, "Temperature"),
            (LabelKey::EnterValue, "Enter Value"),
            (LabelKey::EnterNumber, "Enter a number"),
            (LabelKey::ConversionDirection, "Conversion Direction"),
            (LabelKey::Convert, "Convert"),
            (LabelKey::KmToMi, "Kilometers → Miles"),
            (LabelKey::MiToKm, "Miles → Kilometers"),
            (LabelKey::CToF, "Celsius → Fahrenheit"),
            (LabelKey::FToC, "Fahrenheit → Celsius"),
            (LabelKey::ConversionFormulas, "Conversion Formulas"),
            (LabelKey::DistanceFormula, "1 kilometer = 0.621371 miles | 1 mile = 1.60934 kilometers"),
            (LabelKey::TempFormula, "°F = (°C × 9/5) + 32 | °C = (°F - 32) × 5/9"),
            (LabelKey::Idle, "Enter a value and click Convert"),
            (LabelKey::ErrorInvalid, "Please enter a valid number"),
            (LabelKey::ErrorPositive, "Please enter a positive number"),
        ]),
    );

    catalogues.insert(
        Locale::Es,
        HashMap::from([
            (LabelKey::Title, "Conversor de Unidades"),
            (LabelKey::Subtitle, "Distancia y temperatura, en tu terminal"),
            (LabelKey::Distance, "Distancia"),
            (LabelKey::Temperature, "Temperatura"),
            (LabelKey::EnterValue, "Ingrese Valor"),
            (LabelKey::EnterNumber, "Ingrese un número"),
            (LabelKey::ConversionDirection, "Dirección de Conversión"),
            (LabelKey::Convert, "Convertir"),
            (LabelKey::KmToMi, "Kilómetros → Millas"),
            (LabelKey::MiToKm, "Millas → Kilómetros"),
            (LabelKey::CToF, "Celsius → Fahrenheit"),
            (LabelKey::FToC, "Fahrenheit → Celsius"),
            (LabelKey::ConversionFormulas, "Fórmulas de Conversión"),
            (LabelKey::DistanceFormula, "1 kilómetro = 0.621371 millas | 1 milla = 1.60934 kilómetros"),
            (LabelKey::TempFormula, "°F = (°C × 9/5) + 32 | °C = (°F - 32) × 5/9"),
            (LabelKey::Idle, "Ingrese un valor y presione Convertir"),
            (LabelKey::ErrorInvalid, "Por favor ingrese un número válido"),
            (LabelKey::ErrorPositive, "Por favor ingrese un número positivo"),
        ]),
    );

    catalogues.insert(
        Locale::Fr,
        HashMap::from([
            (LabelKey::Title, "Convertisseur d'Unités"),
            (LabelKey::Subtitle, "Distance et température, dans votre terminal"),
            (LabelKey::Distance, "Distance"),
            (LabelKey::Temperature, "Température"),
            (LabelKey::EnterValue, "Entrez la Valeur"),
            (LabelKey::EnterNumber, "Entrez un nombre"),
            (LabelKey::ConversionDirection, "Direction de Conversion"),
            (LabelKey::Convert, "Convertir"),
            (LabelKey::KmToMi, "Kilomètres → Miles"),
            (LabelKey::MiToKm, "Miles → Kilomètres"),
            (LabelKey::CToF, "Celsius → Fahrenheit"),
            (LabelKey::FToC, "Fahrenheit → Celsius"),
            (LabelKey::ConversionFormulas, "Formules de Conversion"),
            (LabelKey::DistanceFormula, "1 kilomètre = 0,621371 miles | 1 mile = 1,60934 kilomètres"),
            (LabelKey::TempFormula, "°F = (°C × 9/5) + 32 | °C = (°F - 32) × 5/9"),
            (LabelKey::Idle, "Entrez une valeur et cliquez sur Convertir"),
            (LabelKey::ErrorInvalid, "Veuillez entrer un nombre valide"),
            (LabelKey::ErrorPositive, "Veuillez entrer un nombre positif"),
        ]),
    );

    catalogues
});

/// Look up a label, falling back to English for gaps
pub fn t(locale: Locale, key: LabelKey) -> &'static str {
    CATALOGUES
        .get(&locale)
        .and_then(|catalogue| catalogue.get(&key))
        .or_else(|| CATALOGUES.get(&Locale::En).and_then(|catalogue| catalogue.get(&key)))
        .copied()
        .unwrap_or_else(|| key.as_str())
}

/// User-facing message for a conversion error
pub fn localized_error(locale: Locale, err: &ConversionError) -> String {
    match LabelKey::for_error(err) {
        Some(key) => t(locale, key).to_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_codes() {
        assert_eq!(Locale::from_code("es"), Locale::Es);
        assert_eq!(Locale::from_code("fra"), Locale::Fr);
        assert_eq!(Locale::from_code("es-MX"), Locale::Es);
        assert_eq!(Locale::from_code("fr_CA"), Locale::Fr);
        assert_eq!(Locale::from_code("EN"), Locale::En);
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_english() {
        assert_eq!(Locale::try_from_code("de"), None);
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::from_code("not-a-language"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn test_every_key_in_every_locale() {
        for locale in Locale::ALL {
            let catalogue = CATALOGUES.get(&locale).unwrap();
            for key in LabelKey::ALL {
                let label = catalogue.get(&key).copied().unwrap_or_default();
                assert!(!label.is_empty(), "{:?} missing in {}", key, locale);
            }
        }
    }

    #[test]
    fn test_translations() {
        assert_eq!(t(Locale::Es, LabelKey::Convert), "Convertir");
        assert_eq!(t(Locale::Fr, LabelKey::Temperature), "Température");
        assert_eq!(t(Locale::En, LabelKey::KmToMi), "Kilometers → Miles");
    }

    #[test]
    fn test_localized_errors() {
        assert_eq!(
            localized_error(Locale::Es, &ConversionError::NegativeNotAllowed),
            "Por favor ingrese un número positivo"
        );
        assert_eq!(
            localized_error(Locale::Fr, &ConversionError::InvalidNumber),
            "Veuillez entrer un nombre valide"
        );
        assert_eq!(
            localized_error(Locale::Fr, &ConversionError::InvalidArgument("xToY".into())),
            "Invalid argument: xToY"
        );
    }
}
