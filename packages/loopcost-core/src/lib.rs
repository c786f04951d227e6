//! Loopcost - Static Loop-Nesting Complexity Estimator
//!
//! Feature-First Architecture:
//! - shared/   : Common models (tagged-union Python AST)
//! - features/ : Vertical slices (parsing → cost_analysis)
//! - report/   : Presentation-only renderers (JSON, terminal)
//!
//! Pipeline:
//!
//! ```text
//! source text ──parse/lower──▶ Vec<Stmt> ──LoopTreeBuilder──▶ LoopNode tree
//!                                                                  │
//!                                              ComplexityEvaluator ▼
//!                                                              CostExpr
//! ```
//!
//! The estimate is syntactic and heuristic: iteration sources whose size
//! cannot be attributed to one named identifier degrade to `len(other)`,
//! condition-controlled loops degrade to `?`, and independent `?` markers or
//! repeated `len(name)` terms are never unified. The result is a "shape of
//! the cost" signal, not a proven bound.
//!
//! # Example
//!
//! ```rust,ignore
//! use loopcost_core::{CostAnalysisUseCase, LoopCostAnalyzer};
//!
//! let analyzer = LoopCostAnalyzer::new();
//! let report = analyzer.analyze("for i in range(1, n):\n    pass\n")?;
//!
//! println!("Complexity: {}", report.cost);
//! ```

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Report renderers (presentation only)
pub mod report;

/// Error types
pub mod errors;

pub use errors::{LoopcostError, Result};
pub use features::cost_analysis::application::{
    CostAnalysisUseCase, CostReport, LoopCostAnalyzer,
};
pub use features::cost_analysis::domain::{CostExpr, IterationFactor, LoopKind, LoopNode};
pub use features::cost_analysis::infrastructure::{
    classify_iterable, ComplexityEvaluator, LoopTreeBuilder,
};
pub use features::parsing::PythonParser;
pub use shared::ast::{Expr, LiteralKind, Module, Stmt};
