//! Converter session state shared by every front end.
//!
//! Fields are private so the active kind can only change through the
//! transitions below, which keep it inside the active mode's pair.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use super::{parse_input, perform_conversion};
use crate::shared::error::ConversionError;
use crate::shared::types::{ConversionKind, ConversionResult, ConverterMode};

/// Reducer input for `ConverterState::dispatch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export)]
pub enum ConverterAction {
    InputChanged(String),
    SwitchMode(ConverterMode),
    ToggleDirection,
    SelectKind(ConversionKind),
    Convert,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConverterState {
    input_value: String,
    conversion_type: ConversionKind,
    converter_mode: ConverterMode,
    result: Option<ConversionResult>,
    error: Option<ConversionError>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(ConverterMode::Distance)
    }
}

impl ConverterState {
    pub fn new(mode: ConverterMode) -> Self {
        Self {
            input_value: String::new(),
            conversion_type: mode.default_kind(),
            converter_mode: mode,
            result: None,
            error: None,
        }
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn conversion_type(&self) -> ConversionKind {
        self.conversion_type
    }

    pub fn converter_mode(&self) -> ConverterMode {
        self.converter_mode
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ConversionError> {
        self.error.as_ref()
    }

    /// Store pending text. The previous result stays visible until the next convert.
    pub fn handle_input_change(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
        self.error = None;
    }

    /// Reset kind to the mode's default and clear input, result and error.
    pub fn switch_mode(&mut self, mode: ConverterMode) {
        debug!(from = %self.converter_mode, to = %mode, "switching converter mode");
        self.converter_mode = mode;
        self.conversion_type = mode.default_kind();
        self.input_value.clear();
        self.result = None;
        self.error = None;
    }

    /// Flip between the active mode's two kinds. Never crosses modes.
    pub fn toggle_conversion_type(&mut self) {
        self.conversion_type = self.conversion_type.inverse();
        self.result = None;
        self.error = None;
        debug!(kind = %self.conversion_type, "conversion direction toggled");
    }

    /// Pick a direction explicitly. Kinds from the other mode are rejected and
    /// leave the state untouched.
    pub fn select_kind(&mut self, kind: ConversionKind) -> Result<(), ConversionError> {
        if !self.converter_mode.contains(kind) {
            return Err(ConversionError::InvalidArgument(format!(
                "{} is not a {} conversion",
                kind, self.converter_mode
            )));
        }
        if kind != self.conversion_type {
            self.toggle_conversion_type();
        }
        Ok(())
    }

    /// Validate the pending text, apply the mode's sign policy and convert.
    /// The outcome is stored and also returned.
    pub fn handle_convert(&mut self) -> Result<ConversionResult, ConversionError> {
        let outcome = parse_input(&self.input_value).and_then(|value| {
            self.converter_mode.check_value(value)?;
            Ok(perform_conversion(value, self.conversion_type))
        });

        match &outcome {
            Ok(result) => {
                self.result = Some(result.clone());
                self.error = None;
            }
            Err(err) => {
                debug!(input = %self.input_value, error = %err, "conversion rejected");
                self.result = None;
                self.error = Some(err.clone());
            }
        }
        outcome
    }

    pub fn dispatch(&mut self, action: ConverterAction) -> Result<(), ConversionError> {
        match action {
            ConverterAction::InputChanged(value) => self.handle_input_change(value),
            ConverterAction::SwitchMode(mode) => self.switch_mode(mode),
            ConverterAction::ToggleDirection => self.toggle_conversion_type(),
            ConverterAction::SelectKind(kind) => self.select_kind(kind)?,
            ConverterAction::Convert => {
                self.handle_convert()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state() {
        let state = ConverterState::default();
        assert_eq!(state.converter_mode(), ConverterMode::Distance);
        assert_eq!(state.conversion_type(), ConversionKind::KmToMi);
        assert_eq!(state.input_value(), "");
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_convert_distance() {
        let mut state = ConverterState::default();
        state.handle_input_change("10");
        let result = state.handle_convert().unwrap();
        assert_relative_eq!(result.result, 6.21371, max_relative = 1e-12);
        assert_eq!(state.result(), Some(&result));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_invalid_input_sets_error_and_clears_result() {
        let mut state = ConverterState::default();
        state.handle_input_change("10");
        state.handle_convert().unwrap();

        state.handle_input_change("ten");
        assert_eq!(state.handle_convert(), Err(ConversionError::InvalidNumber));
        assert_eq!(state.error(), Some(&ConversionError::InvalidNumber));
        assert!(state.result().is_none());
    }

    #[test]
    fn test_distance_rejects_negative() {
        let mut state = ConverterState::default();
        state.handle_input_change("-3");
        assert_eq!(state.handle_convert(), Err(ConversionError::NegativeNotAllowed));
        assert_eq!(state.error(), Some(&ConversionError::NegativeNotAllowed));
    }

    #[test]
    fn test_temperature_accepts_negative() {
        let mut state = ConverterState::new(ConverterMode::Temperature);
        state.handle_input_change("-40");
        assert_eq!(state.handle_convert().unwrap().result, -40.0);
    }

    #[test]
    fn test_input_change_clears_error_keeps_result() {
        let mut state = ConverterState::default();
        state.handle_input_change("1");
        state.handle_convert().unwrap();
        state.handle_input_change("x");
        let _ = state.handle_convert();
        state.handle_input_change("2");
        assert!(state.error().is_none());

        state.handle_convert().unwrap();
        state.handle_input_change("3");
        assert!(state.result().is_some());
    }

    #[test]
    fn test_switch_mode_resets() {
        let mut state = ConverterState::default();
        state.toggle_conversion_type();
        state.handle_input_change("5");
        state.handle_convert().unwrap();

        state.switch_mode(ConverterMode::Temperature);
        assert_eq!(state.conversion_type(), ConversionKind::CToF);
        assert_eq!(state.input_value(), "");
        assert!(state.result().is_none());
        assert!(state.error().is_none());

        state.switch_mode(ConverterMode::Distance);
        assert_eq!(state.conversion_type(), ConversionKind::KmToMi);
    }

    #[test]
    fn test_toggle_stays_in_mode_and_keeps_input() {
        let mut state = ConverterState::new(ConverterMode::Temperature);
        state.handle_input_change("100");
        state.toggle_conversion_type();
        assert_eq!(state.conversion_type(), ConversionKind::FToC);
        assert_eq!(state.input_value(), "100");
        state.toggle_conversion_type();
        assert_eq!(state.conversion_type(), ConversionKind::CToF);
    }

    #[test]
    fn test_select_kind_rejects_other_mode() {
        let mut state = ConverterState::default();
        let before = state.clone();
        assert!(matches!(
            state.select_kind(ConversionKind::FToC),
            Err(ConversionError::InvalidArgument(_))
        ));
        assert_eq!(state, before);

        state.select_kind(ConversionKind::MiToKm).unwrap();
        assert_eq!(state.conversion_type(), ConversionKind::MiToKm);
        state.select_kind(ConversionKind::MiToKm).unwrap();
        assert_eq!(state.conversion_type(), ConversionKind::MiToKm);
    }

    #[test]
    fn test_dispatch_actions() {
        let mut state = ConverterState::default();
        state.dispatch(ConverterAction::SwitchMode(ConverterMode::Temperature)).unwrap();
        state.dispatch(ConverterAction::InputChanged("212".into())).unwrap();
        state.dispatch(ConverterAction::ToggleDirection).unwrap();
        state.dispatch(ConverterAction::Convert).unwrap();
        assert_eq!(state.result().map(|r| r.result), Some(100.0));
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_value(ConverterAction::SwitchMode(ConverterMode::Temperature)).unwrap();
        assert_eq!(json["type"], "SwitchMode");
        assert_eq!(json["payload"], "temperature");

        let action: ConverterAction = serde_json::from_str(r#"{"type":"ToggleDirection"}"#).unwrap();
        assert_eq!(action, ConverterAction::ToggleDirection);
    }

    fn any_action() -> impl Strategy<Value = ConverterAction> {
        prop_oneof![
            "[-0-9.a-z ]{0,8}".prop_map(ConverterAction::InputChanged),
            Just(ConverterAction::SwitchMode(ConverterMode::Distance)),
            Just(ConverterAction::SwitchMode(ConverterMode::Temperature)),
            Just(ConverterAction::ToggleDirection),
            Just(ConverterAction::SelectKind(ConversionKind::KmToMi)),
            Just(ConverterAction::SelectKind(ConversionKind::MiToKm)),
            Just(ConverterAction::SelectKind(ConversionKind::CToF)),
            Just(ConverterAction::SelectKind(ConversionKind::FToC)),
            Just(ConverterAction::Convert),
        ]
    }

    proptest! {
        #[test]
        fn prop_kind_always_in_mode(actions in prop::collection::vec(any_action(), 0..40)) {
            let mut state = ConverterState::default();
            for action in actions {
                let _ = state.dispatch(action);
                prop_assert!(state.converter_mode().contains(state.conversion_type()));
                prop_assert!(state.result().is_none() || state.error().is_none());
            }
        }
    }
}
