//! Parsing infrastructure - external dependencies

pub mod python;

pub use python::PythonParser;
