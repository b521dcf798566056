//! Line-oriented converter session driving `ConverterState`.
//!
//! Any line that is not a `:` command becomes the pending input and is
//! converted immediately, like typing a value and pressing Enter in the widget.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::core::features::unit_converter::format::{format_result, formula};
use crate::core::features::unit_converter::state::{ConverterAction, ConverterState};
use crate::core::i18n::{localized_error, t, LabelKey, Locale};
use crate::shared::types::ConverterMode;

const HELP: &str = "Commands: <number> convert | :t toggle direction | :m distance|temperature switch mode | :f formula | :h help | :q quit";

/// Whether the session keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct InteractiveSession {
    state: ConverterState,
    locale: Locale,
    decimals: usize,
}

impl InteractiveSession {
    pub fn new(mode: ConverterMode, locale: Locale, decimals: usize) -> Self {
        Self {
            state: ConverterState::new(mode),
            locale,
            decimals,
        }
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    /// Read lines until `:q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.write_header(out)?;
        writeln!(out, "{}", HELP)?;
        self.write_prompt(out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(line.trim(), out)? == Flow::Quit {
                break;
            }
            self.write_prompt(out)?;
        }
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line {
            "" => {}
            ":q" | ":quit" => return Ok(Flow::Quit),
            ":h" | ":help" => writeln!(out, "{}", HELP)?,
            ":f" | ":formula" => {
                let mode = self.state.converter_mode();
                writeln!(
                    out,
                    "{}: {}",
                    t(self.locale, LabelKey::ConversionFormulas),
                    formula(mode, self.locale)
                )?;
            }
            ":t" | ":toggle" => {
                self.apply(ConverterAction::ToggleDirection, out)?;
                self.write_direction(out)?;
                self.write_idle(out)?;
            }
            _ if line.starts_with(":m") => {
                let arg = line.trim_start_matches(":mode").trim_start_matches(":m").trim();
                match arg.parse::<ConverterMode>() {
                    Ok(mode) => {
                        self.apply(ConverterAction::SwitchMode(mode), out)?;
                        self.write_header(out)?;
                        self.write_idle(out)?;
                    }
                    Err(err) => writeln!(out, "⚠️ {}", localized_error(self.locale, &err))?,
                }
            }
            _ if line.starts_with(':') => {
                writeln!(out, "Unknown command: {}", line)?;
                writeln!(out, "{}", HELP)?;
            }
            value => {
                self.apply(ConverterAction::InputChanged(value.to_string()), out)?;
                self.apply(ConverterAction::Convert, out)?;
                if let Some(result) = self.state.result() {
                    writeln!(out, "{}", format_result(result, self.decimals))?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Dispatch an action, printing a localized error if it is rejected
    fn apply<W: Write>(&mut self, action: ConverterAction, out: &mut W) -> io::Result<()> {
        debug!(?action, "interactive action");
        if let Err(err) = self.state.dispatch(action) {
            writeln!(out, "⚠️ {}", localized_error(self.locale, &err))?;
        }
        Ok(())
    }

    fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mode = self.state.converter_mode();
        writeln!(
            out,
            "== {} {} ==",
            t(self.locale, LabelKey::for_mode(mode)),
            t(self.locale, LabelKey::Title)
        )?;
        self.write_direction(out)
    }

    fn write_direction<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}: {}",
            t(self.locale, LabelKey::ConversionDirection),
            t(self.locale, LabelKey::for_kind(self.state.conversion_type()))
        )
    }

    /// Placeholder shown while there is no result to display
    fn write_idle<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.state.result().is_none() {
            writeln!(out, "{}", t(self.locale, LabelKey::Idle))?;
        }
        Ok(())
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}> ", t(self.locale, LabelKey::EnterValue))?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::ConversionKind;
    use std::io::Cursor;

    fn session_output(mode: ConverterMode, locale: Locale, script: &str) -> (InteractiveSession, String) {
        let mut session = InteractiveSession::new(mode, locale, 4);
        let mut out = Vec::new();
        session.run(Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_converts_lines() {
        let (_, out) = session_output(ConverterMode::Distance, Locale::En, "10\n:q\n");
        assert!(out.contains("== Distance Unit Converter =="));
        assert!(out.contains("10.0000 km = 6.2137 mi"));
    }

    #[test]
    fn test_toggle_and_mode_switch() {
        let script = ":t\n10\n:m temperature\n100\n:t\n212\n";
        let (session, out) = session_output(ConverterMode::Distance, Locale::En, script);
        assert!(out.contains("Conversion Direction: Miles → Kilometers"));
        assert!(out.contains("10.0000 mi = 16.0934 km"));
        assert!(out.contains("== Temperature Unit Converter =="));
        assert!(out.contains("100.0000 °C = 212.0000 °F"));
        assert!(out.contains("212.0000 °F = 100.0000 °C"));
        assert_eq!(session.state().conversion_type(), ConversionKind::FToC);
    }

    #[test]
    fn test_localized_errors() {
        let (_, out) = session_output(ConverterMode::Distance, Locale::Es, "abc\n-5\n");
        assert!(out.contains("⚠️ Por favor ingrese un número válido"));
        assert!(out.contains("⚠️ Por favor ingrese un número positivo"));
    }

    #[test]
    fn test_negative_temperature_allowed() {
        let (_, out) = session_output(ConverterMode::Temperature, Locale::En, "-10\n");
        assert!(out.contains("-10.0000 °C = 14.0000 °F"));
    }

    #[test]
    fn test_unknown_mode_and_command() {
        let (session, out) = session_output(ConverterMode::Distance, Locale::En, ":m volume\n:x\n");
        assert!(out.contains("⚠️ Invalid argument: unknown converter mode: volume"));
        assert!(out.contains("Unknown command: :x"));
        assert_eq!(session.state().converter_mode(), ConverterMode::Distance);
    }

    #[test]
    fn test_idle_hint_after_reset() {
        let (_, out) = session_output(ConverterMode::Distance, Locale::Fr, "10\n:t\n");
        let toggled = out.find("Miles → Kilomètres").unwrap();
        let idle = out.find("Entrez une valeur et cliquez sur Convertir").unwrap();
        assert!(idle > toggled);

        let (_, out) = session_output(ConverterMode::Distance, Locale::En, ":m temperature\n");
        assert_eq!(out.matches("Enter a value and click Convert").count(), 1);

        let (_, out) = session_output(ConverterMode::Distance, Locale::En, "10\n");
        assert!(!out.contains("Enter a value and click Convert"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, out) = session_output(ConverterMode::Distance, Locale::En, ":q\n5\n");
        assert!(!out.contains("5.0000 km"));
        assert!(session.state().result().is_none());
    }

    #[test]
    fn test_formula_line() {
        let (_, out) = session_output(ConverterMode::Temperature, Locale::Fr, ":f\n");
        assert!(out.contains("Formules de Conversion: °F = (°C × 9/5) + 32"));
    }
}
