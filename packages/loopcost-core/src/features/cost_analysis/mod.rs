//! Cost Analysis
//!
//! Estimates the asymptotic cost of a body of Python code from the nesting
//! structure of its loops:
//! - Classifying each `for` loop's iteration source into a symbolic alphabet
//! - Building a tree that mirrors loop nesting/sibling structure
//! - Reducing the tree bottom-up to one symbolic cost expression
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - IterationFactor (c, len(n), ...)     │
//! │  - LoopNode (nesting tree)              │
//! │  - CostExpr (symbolic cost)             │
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - classify_iterable (classifier)       │
//! │  - LoopTreeBuilder (tree construction)  │
//! │  - ComplexityEvaluator (reduction)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every stage is a pure function over an immutable input; independent
//! analyses can run concurrently with no coordination.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{CostAnalysisUseCase, CostReport, LoopCostAnalyzer};

// Re-exports for convenience
pub use domain::{CostExpr, IterationFactor, LoopKind, LoopNode};
pub use infrastructure::{classify_iterable, ComplexityEvaluator, LoopTreeBuilder};
