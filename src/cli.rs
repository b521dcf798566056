//! Terminal front end
//!
//! Usage:
//! ```bash
//! # One-shot conversion (defaults to km → mi)
//! unit-converter convert 10
//! unit-converter convert --kind f-to-c 212
//! unit-converter convert --kind c-to-f --json -40
//!
//! # Interactive session in Spanish
//! unit-converter --lang es interactive --mode temperature
//!
//! # Catalogue and settings
//! unit-converter kinds --mode distance
//! unit-converter labels
//! unit-converter settings show
//! ```

pub mod interactive;

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::api::commands::{convert, labels, settings};
use crate::core::features::unit_converter::format::MAX_DECIMALS;
use crate::core::i18n::{localized_error, Locale};
use crate::shared::errors::{CommandError, CommandResult, ERR_INVALID_DECIMALS};
use crate::shared::settings::AppSettings;
use crate::shared::types::{ConversionKind, ConvertRequest, ConverterMode};
use interactive::InteractiveSession;

#[derive(Parser, Debug)]
#[command(
    name = "unit-converter",
    version,
    about = "Convert distances (km/mi) and temperatures (°C/°F)",
    long_about = "Convert distances between kilometers and miles and temperatures between Celsius and Fahrenheit, one value at a time or in an interactive session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Label language (ISO 639 code, e.g. "es"); overrides the settings file
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Settings file to use instead of the platform config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal places for displayed values; overrides the settings file
    #[arg(long, global = true)]
    pub decimals: Option<usize>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single value
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Conversion kind: km-to-mi, mi-to-km, c-to-f or f-to-c
        #[arg(long, short = 'k', default_value = "km-to-mi")]
        kind: ConversionKind,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start a line-oriented converter session
    Interactive {
        /// Starting mode (distance or temperature); defaults to the settings file
        #[arg(long)]
        mode: Option<ConverterMode>,
    },

    /// List conversion kinds with localized labels
    Kinds {
        /// Restrict to one mode
        #[arg(long)]
        mode: Option<ConverterMode>,
    },

    /// Print the label catalogue for the active language as JSON
    Labels,

    /// Settings file management
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file location
    Path,
    /// Overwrite the settings file with defaults
    Reset,
}

/// Values resolved from the settings file and command-line overrides
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: AppSettings,
    pub locale: Locale,
    pub decimals: usize,
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load settings (falling back to defaults on failure) and apply overrides.
    pub fn resolve(cli: &Cli) -> Self {
        let settings = settings::get_settings(cli.config.as_deref()).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load settings, using defaults");
            AppSettings::default()
        });

        let lang = cli.lang.as_deref().unwrap_or(&settings.preferences.language);
        let locale = Locale::from_code(lang);
        let decimals = cli.decimals.unwrap_or(settings.preferences.decimal_places);
        debug!(%locale, decimals, "context resolved");

        Self {
            settings,
            locale,
            decimals,
            config_path: cli.config.clone(),
        }
    }
}

/// Run one subcommand against the given terminal streams
pub fn execute<R: BufRead, W: Write>(
    command: &Command,
    ctx: &Context,
    input: R,
    out: &mut W,
) -> CommandResult<()> {
    match command {
        Command::Convert { value, kind, json } => {
            let response = convert::convert_command(ConvertRequest {
                text: value.clone(),
                kind: *kind,
                decimals: Some(checked_decimals(ctx)?),
            })?;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            } else {
                writeln!(out, "{}", response.formatted)?;
            }
        }
        Command::Interactive { mode } => {
            let mode = mode.unwrap_or(ctx.settings.preferences.default_mode);
            InteractiveSession::new(mode, ctx.locale, checked_decimals(ctx)?).run(input, out)?;
        }
        Command::Kinds { mode } => {
            let modes = match mode {
                Some(mode) => vec![*mode],
                None => ConverterMode::ALL.to_vec(),
            };
            for mode in modes {
                for kind in convert::get_conversion_kinds_command(mode, ctx.locale) {
                    writeln!(out, "{:<8} {:<4} {:<4} {}", kind.id, kind.from_unit, kind.to_unit, kind.label)?;
                }
            }
        }
        Command::Labels => {
            let response = labels::get_labels_command(ctx.locale.code());
            writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        }
        Command::Settings { action } => match action {
            SettingsCommand::Show => {
                writeln!(out, "{}", serde_json::to_string_pretty(&ctx.settings)?)?;
            }
            SettingsCommand::Path => {
                let path = match &ctx.config_path {
                    Some(path) => path.clone(),
                    None => AppSettings::get_settings_path()?,
                };
                writeln!(out, "{}", path.display())?;
            }
            SettingsCommand::Reset => {
                settings::save_settings(&AppSettings::default(), ctx.config_path.as_deref())?;
                writeln!(out, "Settings reset to defaults")?;
            }
        },
    }
    Ok(())
}

/// Decimal places for displayed values, only checked by commands that format numbers
fn checked_decimals(ctx: &Context) -> CommandResult<usize> {
    if ctx.decimals > MAX_DECIMALS {
        return Err(CommandError::InvalidInput(ERR_INVALID_DECIMALS.to_string()));
    }
    Ok(ctx.decimals)
}

/// Message for a failed command, localized where the error has a label
pub fn describe_error(err: &CommandError, locale: Locale) -> String {
    match err.as_conversion() {
        Some(conversion) if conversion.is_user_input() => localized_error(locale, conversion),
        _ => err.to_string(),
    }
}

/// Process exit code: 2 for rejected input, 1 for everything else
pub fn exit_code(err: &CommandError) -> u8 {
    match err {
        CommandError::Conversion(_) | CommandError::InvalidInput(_) => 2,
        _ => 1,
    }
}
