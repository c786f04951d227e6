//! Feature modules (vertical slices)

pub mod cost_analysis;
pub mod parsing;
