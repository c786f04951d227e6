//! Complexity evaluator
//!
//! Reduces a loop tree bottom-up to one symbolic cost expression, applying
//! identity-element simplification at every level. Total: every tree
//! produces an expression, and independent `?` markers or repeated
//! `len(name)` terms are never unified.

use crate::features::cost_analysis::domain::{CostExpr, IterationFactor, LoopKind, LoopNode};

pub struct ComplexityEvaluator;

impl ComplexityEvaluator {
    /// Evaluate a loop tree to its symbolic cost.
    pub fn evaluate(node: &LoopNode) -> CostExpr {
        match node.kind {
            LoopKind::Root => Self::sum_children(node),
            LoopKind::For => {
                let factor = match &node.factor {
                    Some(IterationFactor::Constant) | None => CostExpr::Identity,
                    Some(IterationFactor::Length(name)) => CostExpr::Length(name.clone()),
                    Some(IterationFactor::UnresolvedLength) => CostExpr::UnresolvedLength,
                };
                let inner = Self::sum_children(node);
                if inner.is_identity() {
                    factor
                } else if factor.is_identity() {
                    inner
                } else {
                    CostExpr::product(factor, inner)
                }
            }
            LoopKind::While => {
                let inner = Self::sum_children(node);
                if inner.is_identity() {
                    CostExpr::Unknown
                } else {
                    CostExpr::product(CostExpr::Unknown, inner)
                }
            }
        }
    }

    /// Sum of the children's costs in child order, with identity terms
    /// dropped - unless every term is the identity, in which case the sum is
    /// the identity itself. A childless node also sums to the identity.
    fn sum_children(node: &LoopNode) -> CostExpr {
        let mut terms: Vec<CostExpr> = node
            .children
            .iter()
            .map(Self::evaluate)
            .filter(|cost| !cost.is_identity())
            .collect();

        match terms.len() {
            0 => CostExpr::Identity,
            1 => terms.remove(0),
            _ => CostExpr::Sum(terms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn constant_for() -> LoopNode {
        LoopNode::bounded(IterationFactor::Constant)
    }

    fn for_len(name: &str) -> LoopNode {
        LoopNode::bounded(IterationFactor::Length(name.to_string()))
    }

    fn with_children(mut node: LoopNode, children: Vec<LoopNode>) -> LoopNode {
        node.children = children;
        node
    }

    fn root_of(children: Vec<LoopNode>) -> LoopNode {
        with_children(LoopNode::root(), children)
    }

    #[test]
    fn test_empty_root_is_identity() {
        assert_eq!(
            ComplexityEvaluator::evaluate(&LoopNode::root()),
            CostExpr::Identity
        );
    }

    #[test]
    fn test_all_constant_loops_reduce_to_identity() {
        let root = root_of(vec![
            constant_for(),
            with_children(constant_for(), vec![constant_for()]),
        ]);
        assert_eq!(ComplexityEvaluator::evaluate(&root), CostExpr::Identity);
    }

    #[test]
    fn test_root_drops_identity_siblings() {
        let root = root_of(vec![constant_for(), for_len("n"), constant_for()]);
        assert_eq!(
            ComplexityEvaluator::evaluate(&root),
            CostExpr::Length("n".to_string())
        );
    }

    #[test]
    fn test_root_sums_in_child_order() {
        let root = root_of(vec![for_len("n"), constant_for(), for_len("num")]);
        let cost = ComplexityEvaluator::evaluate(&root);
        assert_eq!(
            cost,
            CostExpr::Sum(vec![
                CostExpr::Length("n".to_string()),
                CostExpr::Length("num".to_string()),
            ])
        );
        assert_eq!(cost.to_string(), "len(n) + len(num)");
    }

    #[test]
    fn test_for_with_constant_inner_keeps_factor_alone() {
        // for i in range(1, n): for j in ['a','b','c']: ...
        let root = root_of(vec![with_children(for_len("n"), vec![constant_for()])]);
        assert_eq!(
            ComplexityEvaluator::evaluate(&root),
            CostExpr::Length("n".to_string())
        );
    }

    #[test]
    fn test_constant_for_passes_inner_through() {
        let root = root_of(vec![with_children(constant_for(), vec![for_len("xs")])]);
        assert_eq!(
            ComplexityEvaluator::evaluate(&root),
            CostExpr::Length("xs".to_string())
        );
    }

    #[test]
    fn test_nested_for_multiplies() {
        let node = with_children(for_len("n"), vec![for_len("m")]);
        let cost = ComplexityEvaluator::evaluate(&node);
        assert_eq!(
            cost,
            CostExpr::product(
                CostExpr::Length("n".to_string()),
                CostExpr::Length("m".to_string())
            )
        );
        assert_eq!(cost.to_string(), "len(n)*(len(m))");
    }

    #[test]
    fn test_while_without_loops_is_bare_unknown() {
        assert_eq!(
            ComplexityEvaluator::evaluate(&LoopNode::conditional()),
            CostExpr::Unknown
        );
        // wrapping a constant-iterable loop still collapses to bare `?`,
        // never `?*(1)`
        let node = with_children(LoopNode::conditional(), vec![constant_for()]);
        assert_eq!(ComplexityEvaluator::evaluate(&node), CostExpr::Unknown);
    }

    #[test]
    fn test_while_multiplies_nontrivial_inner() {
        let node = with_children(LoopNode::conditional(), vec![for_len("xs")]);
        let cost = ComplexityEvaluator::evaluate(&node);
        assert_eq!(cost.to_string(), "?*(len(xs))");
    }

    #[test]
    fn test_independent_unknowns_are_never_unified() {
        let root = root_of(vec![LoopNode::conditional(), LoopNode::conditional()]);
        let cost = ComplexityEvaluator::evaluate(&root);
        assert_eq!(cost, CostExpr::Sum(vec![CostExpr::Unknown, CostExpr::Unknown]));
        assert_eq!(cost.to_string(), "? + ?");
    }

    #[test]
    fn test_repeated_lengths_are_never_deduplicated() {
        let root = root_of(vec![for_len("n"), for_len("n")]);
        assert_eq!(
            ComplexityEvaluator::evaluate(&root).to_string(),
            "len(n) + len(n)"
        );
    }

    #[test]
    fn test_unresolved_factor_participates_like_a_length() {
        let node = with_children(
            LoopNode::bounded(IterationFactor::UnresolvedLength),
            vec![for_len("xs")],
        );
        assert_eq!(
            ComplexityEvaluator::evaluate(&node).to_string(),
            "len(other)*(len(xs))"
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_factor() -> impl Strategy<Value = IterationFactor> {
            prop_oneof![
                Just(IterationFactor::Constant),
                "[a-z]{1,6}".prop_map(IterationFactor::Length),
                Just(IterationFactor::UnresolvedLength),
            ]
        }

        fn arb_loop() -> impl Strategy<Value = LoopNode> {
            let leaf = prop_oneof![
                arb_factor().prop_map(LoopNode::bounded),
                Just(LoopNode::conditional()),
            ];
            leaf.prop_recursive(4, 24, 3, |inner| {
                prop_oneof![
                    (arb_factor(), prop::collection::vec(inner.clone(), 0..3)).prop_map(
                        |(factor, children)| with_children(LoopNode::bounded(factor), children)
                    ),
                    prop::collection::vec(inner, 0..3).prop_map(|children| with_children(
                        LoopNode::conditional(),
                        children
                    )),
                ]
            })
        }

        proptest! {
            #[test]
            fn evaluation_is_total_and_renders(children in prop::collection::vec(arb_loop(), 0..4)) {
                let root = root_of(children);
                let cost = ComplexityEvaluator::evaluate(&root);
                prop_assert!(!cost.to_string().is_empty());
            }

            #[test]
            fn evaluation_is_deterministic(children in prop::collection::vec(arb_loop(), 0..4)) {
                let root = root_of(children);
                prop_assert_eq!(
                    ComplexityEvaluator::evaluate(&root),
                    ComplexityEvaluator::evaluate(&root)
                );
            }

            #[test]
            fn sums_never_contain_identity_terms(children in prop::collection::vec(arb_loop(), 0..4)) {
                fn check(expr: &CostExpr) -> bool {
                    match expr {
                        CostExpr::Sum(terms) => {
                            terms.len() > 1
                                && terms.iter().all(|t| !t.is_identity() && check(t))
                        }
                        CostExpr::Product(f, inner) => check(f) && check(inner),
                        _ => true,
                    }
                }
                let cost = ComplexityEvaluator::evaluate(&root_of(children));
                prop_assert!(check(&cost));
            }
        }
    }
}
