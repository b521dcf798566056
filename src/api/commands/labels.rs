//! Label catalogue command module

use std::collections::BTreeMap;

use crate::core::i18n::{t, LabelKey, Locale};
use crate::shared::types::LabelsResponse;

/// Full catalogue for `lang`, with the locale actually used after fallback
pub fn get_labels_command(lang: &str) -> LabelsResponse {
    let locale = Locale::from_code(lang);
    let labels: BTreeMap<String, String> = LabelKey::ALL
        .iter()
        .map(|key| (key.as_str().to_string(), t(locale, *key).to_string()))
        .collect();

    LabelsResponse {
        locale: locale.code().to_string(),
        labels,
    }
}
