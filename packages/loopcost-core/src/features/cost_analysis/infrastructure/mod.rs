//! Cost analysis infrastructure - the three pipeline stages

pub mod classifier;
pub mod evaluator;
pub mod tree_builder;

pub use classifier::classify_iterable;
pub use evaluator::ComplexityEvaluator;
pub use tree_builder::LoopTreeBuilder;
