//! Front-end facing commands
//!
//! Every command takes and returns serializable DTOs and fails with
//! `CommandError`, so any presentation layer (the bundled CLI, a webview,
//! an IPC bridge) can call them without touching engine internals.
//!
//! ## Architecture
//!
//! - `convert`: text → validated conversion, kind listings
//! - `labels`: localized label catalogue
//! - `settings`: settings persistence

pub mod convert;
pub mod labels;
pub mod settings;
