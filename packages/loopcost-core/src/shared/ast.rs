//! Tagged-union Python AST
//!
//! The analysis dispatches by kind over these explicit enums instead of
//! walking the tree-sitter CST directly. The inventory covers the expression
//! shapes the iterable classifier distinguishes and every statement kind
//! capable of containing nested statements; unrecognized shapes are kept as
//! conservative catch-alls rather than dropped, so the analysis stays total.

/// A parsed module (or function body) - the unit of one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub body: Vec<Stmt>,
}

/// Scalar literal kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Float,
    String,
    Boolean,
    None,
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Scalar literal (`5`, `1.5`, `"abc"`, `True`, `None`)
    Literal(LiteralKind),
    /// List literal (`[1, 2, 3]`)
    List(Vec<Expr>),
    /// Tuple literal (`(1, 2)`)
    Tuple(Vec<Expr>),
    /// Set literal (`{1, 2}`)
    Set(Vec<Expr>),
    /// Dict literal (`{"a": 1}`)
    Dict(Vec<(Expr, Expr)>),
    /// Bare identifier reference
    Name(String),
    /// Call; positional arguments only - keyword arguments are dropped
    /// during lowering, matching the original analyzer's view of a call
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// Attribute access (`obj.field`)
    Attribute { value: Box<Expr>, attr: String },
    /// Subscript (`arr[i]`)
    Subscript { value: Box<Expr>, index: Box<Expr> },
    /// Binary operator; the operator is kept as source text
    BinaryOp {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Lambda. Its body is an expression and so can never contain a loop
    /// statement.
    Lambda,
    /// List/set/dict comprehension or generator expression. Comprehension
    /// clauses are expressions, not `for` statements - they never become
    /// loop nodes.
    Comprehension,
    /// Anything else, tagged with its CST kind
    Opaque(String),
}

/// Statement kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Bounded-iteration loop. `orelse` is the trailing `else` clause.
    For {
        target: String,
        iter: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    /// Condition-controlled loop
    While {
        condition: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    /// Conditional; `elif` chains and the `else` clause are folded into
    /// `orelse`
    If {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    FunctionDef {
        name: String,
        body: Vec<Stmt>,
    },
    ClassDef {
        name: String,
        body: Vec<Stmt>,
    },
    With {
        body: Vec<Stmt>,
    },
    Try {
        body: Vec<Stmt>,
        handlers: Vec<Vec<Stmt>>,
        orelse: Vec<Stmt>,
        finalbody: Vec<Stmt>,
    },
    /// Expression statement
    Expr(Expr),
    Assign {
        value: Expr,
    },
    Return(Option<Expr>),
    Pass,
    Break,
    Continue,
    /// Unrecognized statement kind; any nested blocks are preserved so loop
    /// discovery still sees them (e.g. `match` arms)
    Other {
        body: Vec<Stmt>,
    },
}
