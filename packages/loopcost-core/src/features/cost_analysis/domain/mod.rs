//! Domain models for cost analysis
//!
//! Pure business logic with no external dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic tag describing how many times a bounded-iteration loop runs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IterationFactor {
    /// Literal value or literal container - a constant number of iterations
    Constant,
    /// As many iterations as the named identifier has elements
    Length(String),
    /// Size cannot be attributed to one named identifier
    UnresolvedLength,
}

impl fmt::Display for IterationFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "c"),
            Self::Length(name) => write!(f, "len({})", name),
            Self::UnresolvedLength => write!(f, "len(other)"),
        }
    }
}

/// Loop tree node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopKind {
    /// Synthetic root of one analysis
    Root,
    /// Bounded-iteration loop (`for`)
    For,
    /// Condition-controlled loop (`while`)
    While,
}

/// One node of the loop-nesting tree
///
/// Siblings appear in lexical source order; a loop lexically inside another
/// loop's body is a descendant. Non-loop statements are traversed for
/// discovery but never materialized. `factor` is present only on For nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopNode {
    pub kind: LoopKind,
    pub factor: Option<IterationFactor>,
    pub children: Vec<LoopNode>,
}

impl LoopNode {
    /// The synthetic root (exactly one per analysis)
    pub fn root() -> Self {
        Self {
            kind: LoopKind::Root,
            factor: None,
            children: Vec::new(),
        }
    }

    /// A `for` node carrying its iteration factor
    pub fn bounded(factor: IterationFactor) -> Self {
        Self {
            kind: LoopKind::For,
            factor: Some(factor),
            children: Vec::new(),
        }
    }

    /// A `while` node (iteration count unknowable from syntax)
    pub fn conditional() -> Self {
        Self {
            kind: LoopKind::While,
            factor: None,
            children: Vec::new(),
        }
    }

    /// Tree depth below this node; equals the maximum loop-nesting depth of
    /// the analyzed source when called on the root.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Symbolic cost expression
///
/// A structural algebraic value, not free text: simplification compares
/// variants, and `Display` is the only place the original's strings are
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostExpr {
    /// The identity element "1" - no nontrivial contribution
    Identity,
    /// `len(<identifier>)`
    Length(String),
    /// `len(other)` - conservative unresolved length
    UnresolvedLength,
    /// `?` - unknown iteration count (one per While, never unified)
    Unknown,
    /// Sum of non-identity terms, in child order
    Sum(Vec<CostExpr>),
    /// Product; the right factor renders parenthesized
    Product(Box<CostExpr>, Box<CostExpr>),
}

impl CostExpr {
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn product(factor: CostExpr, inner: CostExpr) -> Self {
        Self::Product(Box::new(factor), Box::new(inner))
    }
}

impl fmt::Display for CostExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "1"),
            Self::Length(name) => write!(f, "len({})", name),
            Self::UnresolvedLength => write!(f, "len(other)"),
            Self::Unknown => write!(f, "?"),
            Self::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            }
            Self::Product(factor, inner) => write!(f, "{}*({})", factor, inner),
        }
    }
}
