//! Python source → tagged-union AST (lowering over tree-sitter)
//!
//! The lowering is deliberately lossy: it keeps exactly the statement and
//! expression structure the loop analysis dispatches on. Anything it does not
//! recognize is preserved as `Expr::Opaque` / `Stmt::Other` so the analysis
//! stays total over valid source.

use crate::errors::{LoopcostError, Result};
use crate::shared::ast::{Expr, LiteralKind, Module, Stmt};
use tree_sitter::{Node, Parser};

/// Python parser adapter
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| LoopcostError::parse(format!("Failed to set Python language: {}", e)))?;

        Ok(Self { parser })
    }

    /// Parse one module (or function body) into the tagged-union AST.
    ///
    /// tree-sitter error-recovers instead of raising on malformed source;
    /// the analysis must never run on a recovered tree, so any `ERROR` or
    /// missing node fails the whole parse here. The gate is only as strict
    /// as the grammar: some source CPython rejects (keywords used as
    /// identifiers, for one) parses without an `ERROR` node and is accepted.
    pub fn parse_module(&mut self, source: &str) -> Result<Module> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| LoopcostError::parse("Failed to parse Python source"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(LoopcostError::Parse(match first_error_line(&root) {
                Some(line) => format!("Invalid Python syntax at line {}", line),
                None => "Invalid Python syntax".to_string(),
            }));
        }

        let body = lower_block(root, source);
        tracing::debug!("parsed module: {} top-level statement(s)", body.len());
        Ok(Module { body })
    }
}

/// Find the first ERROR/missing node (1-indexed line), for the parse error
/// message.
fn first_error_line(root: &Node) -> Option<u32> {
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row as u32 + 1);
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    None
}

fn node_text(node: Node, source: &str) -> String {
    source[node.byte_range()].to_string()
}

/// Lower the statements of a `module` or `block` node.
fn lower_block(node: Node, source: &str) -> Vec<Stmt> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter_map(|child| lower_statement(child, source))
        .collect()
}

fn lower_statement(node: Node, source: &str) -> Option<Stmt> {
    let stmt = match node.kind() {
        "for_statement" => Stmt::For {
            target: node
                .child_by_field_name("left")
                .map(|n| node_text(n, source))
                .unwrap_or_default(),
            iter: node
                .child_by_field_name("right")
                .map(|n| lower_expression(n, source))
                .unwrap_or(Expr::Opaque("missing".to_string())),
            body: node
                .child_by_field_name("body")
                .map(|b| lower_block(b, source))
                .unwrap_or_default(),
            orelse: lower_alternative(node, source),
        },
        "while_statement" => Stmt::While {
            condition: node
                .child_by_field_name("condition")
                .map(|n| lower_expression(n, source))
                .unwrap_or(Expr::Opaque("missing".to_string())),
            body: node
                .child_by_field_name("body")
                .map(|b| lower_block(b, source))
                .unwrap_or_default(),
            orelse: lower_alternative(node, source),
        },
        "if_statement" => {
            // elif clauses and the else clause are siblings in the CST;
            // fold them all into one alternative block
            let mut orelse = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "elif_clause" => orelse.push(Stmt::If {
                        test: child
                            .child_by_field_name("condition")
                            .map(|n| lower_expression(n, source))
                            .unwrap_or(Expr::Opaque("missing".to_string())),
                        body: child
                            .child_by_field_name("consequence")
                            .map(|b| lower_block(b, source))
                            .unwrap_or_default(),
                        orelse: Vec::new(),
                    }),
                    "else_clause" => {
                        if let Some(block) = clause_block(child) {
                            orelse.extend(lower_block(block, source));
                        }
                    }
                    _ => {}
                }
            }
            Stmt::If {
                test: node
                    .child_by_field_name("condition")
                    .map(|n| lower_expression(n, source))
                    .unwrap_or(Expr::Opaque("missing".to_string())),
                body: node
                    .child_by_field_name("consequence")
                    .map(|b| lower_block(b, source))
                    .unwrap_or_default(),
                orelse,
            }
        }
        "function_definition" => Stmt::FunctionDef {
            name: node
                .child_by_field_name("name")
                .map(|n| node_text(n, source))
                .unwrap_or_default(),
            body: node
                .child_by_field_name("body")
                .map(|b| lower_block(b, source))
                .unwrap_or_default(),
        },
        "class_definition" => Stmt::ClassDef {
            name: node
                .child_by_field_name("name")
                .map(|n| node_text(n, source))
                .unwrap_or_default(),
            body: node
                .child_by_field_name("body")
                .map(|b| lower_block(b, source))
                .unwrap_or_default(),
        },
        "decorated_definition" => {
            let definition = node.child_by_field_name("definition")?;
            return lower_statement(definition, source);
        }
        "with_statement" => Stmt::With {
            body: node
                .child_by_field_name("body")
                .map(|b| lower_block(b, source))
                .unwrap_or_default(),
        },
        "try_statement" => {
            let mut handlers = Vec::new();
            let mut orelse = Vec::new();
            let mut finalbody = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "except_clause" | "except_group_clause" => {
                        if let Some(block) = clause_block(child) {
                            handlers.push(lower_block(block, source));
                        }
                    }
                    "else_clause" => {
                        if let Some(block) = clause_block(child) {
                            orelse = lower_block(block, source);
                        }
                    }
                    "finally_clause" => {
                        if let Some(block) = clause_block(child) {
                            finalbody = lower_block(block, source);
                        }
                    }
                    _ => {}
                }
            }
            Stmt::Try {
                body: node
                    .child_by_field_name("body")
                    .map(|b| lower_block(b, source))
                    .unwrap_or_default(),
                handlers,
                orelse,
                finalbody,
            }
        }
        "expression_statement" => {
            let mut cursor = node.walk();
            let inner = node.named_children(&mut cursor).next()?;
            match inner.kind() {
                "assignment" | "augmented_assignment" => Stmt::Assign {
                    value: inner
                        .child_by_field_name("right")
                        .map(|n| lower_expression(n, source))
                        .unwrap_or(Expr::Opaque("assignment".to_string())),
                },
                _ => Stmt::Expr(lower_expression(inner, source)),
            }
        }
        "return_statement" => {
            let mut cursor = node.walk();
            let value = node
                .named_children(&mut cursor)
                .next()
                .map(|n| lower_expression(n, source));
            Stmt::Return(value)
        }
        "pass_statement" => Stmt::Pass,
        "break_statement" => Stmt::Break,
        "continue_statement" => Stmt::Continue,
        "comment" => return None,
        _ => {
            // Unrecognized statement (match, import, global, ...): keep any
            // nested blocks so loop discovery still reaches them
            let mut body = Vec::new();
            collect_nested_blocks(node, source, &mut body);
            Stmt::Other { body }
        }
    };
    Some(stmt)
}

/// Trailing `else` clause of a loop, lowered as part of the loop.
fn lower_alternative(node: Node, source: &str) -> Vec<Stmt> {
    node.child_by_field_name("alternative")
        .and_then(clause_block)
        .map(|block| lower_block(block, source))
        .unwrap_or_default()
}

/// The block of a clause node (`else_clause`, `except_clause`, ...).
fn clause_block(node: Node) -> Option<Node> {
    if let Some(body) = node.child_by_field_name("body") {
        return Some(body);
    }
    let mut cursor = node.walk();
    let block = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "block");
    block
}

/// Lower every block found under an unrecognized statement, without
/// descending into blocks twice.
fn collect_nested_blocks(node: Node, source: &str, out: &mut Vec<Stmt>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "block" {
            out.extend(lower_block(child, source));
        } else {
            collect_nested_blocks(child, source, out);
        }
    }
}

fn lower_expression(node: Node, source: &str) -> Expr {
    match node.kind() {
        "integer" => Expr::Literal(LiteralKind::Integer),
        "float" => Expr::Literal(LiteralKind::Float),
        "string" | "concatenated_string" => Expr::Literal(LiteralKind::String),
        "true" | "false" => Expr::Literal(LiteralKind::Boolean),
        "none" => Expr::Literal(LiteralKind::None),
        "identifier" => Expr::Name(node_text(node, source)),
        "list" => Expr::List(lower_elements(node, source)),
        "tuple" => Expr::Tuple(lower_elements(node, source)),
        "set" => Expr::Set(lower_elements(node, source)),
        "dictionary" => {
            let mut pairs = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "pair" {
                    if let (Some(key), Some(value)) = (
                        child.child_by_field_name("key"),
                        child.child_by_field_name("value"),
                    ) {
                        pairs.push((
                            lower_expression(key, source),
                            lower_expression(value, source),
                        ));
                    }
                }
            }
            Expr::Dict(pairs)
        }
        "call" => Expr::Call {
            callee: Box::new(
                node.child_by_field_name("function")
                    .map(|n| lower_expression(n, source))
                    .unwrap_or(Expr::Opaque("missing".to_string())),
            ),
            args: node
                .child_by_field_name("arguments")
                .map(|args| lower_arguments(args, source))
                .unwrap_or_default(),
        },
        "attribute" => Expr::Attribute {
            value: Box::new(
                node.child_by_field_name("object")
                    .map(|n| lower_expression(n, source))
                    .unwrap_or(Expr::Opaque("missing".to_string())),
            ),
            attr: node
                .child_by_field_name("attribute")
                .map(|n| node_text(n, source))
                .unwrap_or_default(),
        },
        "subscript" => Expr::Subscript {
            value: Box::new(
                node.child_by_field_name("value")
                    .map(|n| lower_expression(n, source))
                    .unwrap_or(Expr::Opaque("missing".to_string())),
            ),
            index: Box::new(
                node.child_by_field_name("subscript")
                    .map(|n| lower_expression(n, source))
                    .unwrap_or(Expr::Opaque("missing".to_string())),
            ),
        },
        "binary_operator" | "boolean_operator" => {
            match (
                node.child_by_field_name("operator"),
                node.child_by_field_name("left"),
                node.child_by_field_name("right"),
            ) {
                (Some(op), Some(left), Some(right)) => Expr::BinaryOp {
                    op: node_text(op, source),
                    left: Box::new(lower_expression(left, source)),
                    right: Box::new(lower_expression(right, source)),
                },
                _ => Expr::Opaque(node.kind().to_string()),
            }
        }
        "parenthesized_expression" => {
            let mut cursor = node.walk();
            let inner = node.named_children(&mut cursor).next();
            match inner {
                Some(inner) => lower_expression(inner, source),
                None => Expr::Opaque("parenthesized_expression".to_string()),
            }
        }
        "lambda" => Expr::Lambda,
        "list_comprehension" | "set_comprehension" | "dictionary_comprehension"
        | "generator_expression" => Expr::Comprehension,
        other => Expr::Opaque(other.to_string()),
    }
}

/// Elements of a list/tuple/set literal.
fn lower_elements(node: Node, source: &str) -> Vec<Expr> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower_expression(child, source))
        .collect()
}

/// Positional arguments of a call. Keyword arguments live outside the
/// positional view, exactly as in Python's `ast.Call.args`.
fn lower_arguments(args_node: Node, source: &str) -> Vec<Expr> {
    if args_node.kind() != "argument_list" {
        // `f(x for x in xs)` - bare generator argument
        return vec![lower_expression(args_node, source)];
    }
    let mut cursor = args_node.walk();
    args_node
        .named_children(&mut cursor)
        .filter(|child| {
            !matches!(
                child.kind(),
                "keyword_argument" | "dictionary_splat" | "comment"
            )
        })
        .map(|child| lower_expression(child, source))
        .collect()
}
