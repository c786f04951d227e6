//! Loop tree builder
//!
//! One depth-first pass over a statement block: `for`/`while` statements
//! become tree nodes with push/recurse/pop discipline, every other statement
//! is traversed structurally so loops hidden under conditionals, function
//! bodies, `with` or `try` blocks are still discovered. Recursion depth is
//! bounded by the syntactic nesting depth of the source.

use crate::features::cost_analysis::domain::LoopNode;
use crate::features::cost_analysis::infrastructure::classifier::classify_iterable;
use crate::shared::ast::Stmt;

pub struct LoopTreeBuilder;

impl LoopTreeBuilder {
    /// Build the root loop tree for one statement block.
    pub fn build(body: &[Stmt]) -> LoopNode {
        let mut root = LoopNode::root();
        Self::visit_block(body, &mut root.children);
        root
    }

    /// Append the loop nodes of `stmts`, in lexical order, to the current
    /// parent's children.
    fn visit_block(stmts: &[Stmt], parent: &mut Vec<LoopNode>) {
        for stmt in stmts {
            match stmt {
                Stmt::For {
                    iter, body, orelse, ..
                } => {
                    let mut node = LoopNode::bounded(classify_iterable(iter));
                    // the loop's else clause runs at the same nesting level
                    // as its body
                    Self::visit_block(body, &mut node.children);
                    Self::visit_block(orelse, &mut node.children);
                    parent.push(node);
                }
                Stmt::While { body, orelse, .. } => {
                    let mut node = LoopNode::conditional();
                    Self::visit_block(body, &mut node.children);
                    Self::visit_block(orelse, &mut node.children);
                    parent.push(node);
                }
                Stmt::If { body, orelse, .. } => {
                    Self::visit_block(body, parent);
                    Self::visit_block(orelse, parent);
                }
                Stmt::FunctionDef { body, .. }
                | Stmt::ClassDef { body, .. }
                | Stmt::With { body }
                | Stmt::Other { body } => {
                    Self::visit_block(body, parent);
                }
                Stmt::Try {
                    body,
                    handlers,
                    orelse,
                    finalbody,
                } => {
                    Self::visit_block(body, parent);
                    for handler in handlers {
                        Self::visit_block(handler, parent);
                    }
                    Self::visit_block(orelse, parent);
                    Self::visit_block(finalbody, parent);
                }
                // leaf statements: expressions never contain statements, so
                // there is nothing to discover below them
                Stmt::Expr(_)
                | Stmt::Assign { .. }
                | Stmt::Return(_)
                | Stmt::Pass
                | Stmt::Break
                | Stmt::Continue => {}
            }
        }
    }
}
