pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod shared;

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

pub use crate::core::features::unit_converter::{
    convert_text, is_valid_input, parse_input, perform_conversion, ConversionRates, CONVERSION_RATES,
};
pub use crate::core::features::unit_converter::state::{ConverterAction, ConverterState};
pub use crate::shared::error::ConversionError;
pub use crate::shared::types::{ConversionKind, ConversionResult, ConverterMode};

/// Entry point for the `unit-converter` binary
pub fn run() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::LoggingConfig::from_verbosity(cli.verbose).init();

    let ctx = cli::Context::resolve(&cli);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match cli::execute(&cli.command, &ctx, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("⚠️ {}", cli::describe_error(&err, ctx.locale));
            ExitCode::from(cli::exit_code(&err))
        }
    }
}
