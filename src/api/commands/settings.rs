//! Settings command module
//!
//! Handles application settings persistence.

use std::path::Path;

use crate::shared::errors::CommandResult;
use crate::shared::settings::AppSettings;

/// Get current application settings, from `path` when given
pub fn get_settings(path: Option<&Path>) -> CommandResult<AppSettings> {
    let settings = match path {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };
    Ok(settings)
}

/// Save application settings, to `path` when given
pub fn save_settings(settings: &AppSettings, path: Option<&Path>) -> CommandResult<()> {
    match path {
        Some(path) => settings.save_to(path)?,
        None => settings.save()?,
    }
    Ok(())
}
