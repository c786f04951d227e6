//! Shared models used across features

pub mod ast;
