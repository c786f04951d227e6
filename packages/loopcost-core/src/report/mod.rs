//! Report renderers - pure presentation over the analysis outputs
//!
//! These carry no analytical logic: they consume the loop tree and the cost
//! expression and turn them into a structured record or a terminal display.

pub mod json;
pub mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;
