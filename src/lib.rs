//! Pluggable input validators and a text field that re-validates on every change.

pub mod config;
pub mod field;
pub mod form;
pub mod validation;
