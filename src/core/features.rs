//! Converter features
//!
//! `unit_converter` holds the engine; its `state` and `format` submodules are
//! what front ends drive and display.

pub mod unit_converter;
