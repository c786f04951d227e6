//! Iterable classifier
//!
//! Maps one iteration-source expression to its symbolic iteration factor.
//! Total over any expression: unrecognized shapes degrade to the
//! conservative `len(other)` instead of failing.

use crate::features::cost_analysis::domain::IterationFactor;
use crate::shared::ast::Expr;

/// Classify a bounded-iteration statement's iteration source.
///
/// Rules, in priority order:
/// 1. Literal or literal container → constant
/// 2. Bare identifier → `len(<name>)`
/// 3. `range(...)` with all-literal arguments → constant; otherwise the
///    first non-literal argument decides (scanning left to right, later
///    arguments are never inspected)
/// 4. `len(<identifier>)` → `len(<name>)`
/// 5. Anything else → `len(other)`
pub fn classify_iterable(iter: &Expr) -> IterationFactor {
    match iter {
        Expr::Literal(_)
        | Expr::List(_)
        | Expr::Tuple(_)
        | Expr::Set(_)
        | Expr::Dict(_) => IterationFactor::Constant,
        Expr::Name(name) => IterationFactor::Length(name.clone()),
        Expr::Call { callee, args } => classify_call(callee, args),
        _ => IterationFactor::UnresolvedLength,
    }
}

fn classify_call(callee: &Expr, args: &[Expr]) -> IterationFactor {
    let Expr::Name(fname) = callee else {
        // obj.method(...) and friends
        return IterationFactor::UnresolvedLength;
    };

    match fname.as_str() {
        "range" => {
            // The first non-literal positional argument decides; container
            // literals do not count as literal here (only scalar literals
            // skip the scan).
            for arg in args {
                match arg {
                    Expr::Literal(_) => continue,
                    Expr::Name(name) => return IterationFactor::Length(name.clone()),
                    Expr::Call { callee, args } => return classify_len_argument(callee, args),
                    _ => return IterationFactor::UnresolvedLength,
                }
            }
            // All arguments literal (vacuously so for `range()`)
            IterationFactor::Constant
        }
        "len" => match args {
            [Expr::Name(name)] => IterationFactor::Length(name.clone()),
            _ => IterationFactor::UnresolvedLength,
        },
        _ => IterationFactor::UnresolvedLength,
    }
}

/// A range argument that is itself a call: only `len(<identifier>)` resolves
/// to a named length.
fn classify_len_argument(callee: &Expr, args: &[Expr]) -> IterationFactor {
    match (callee, args) {
        (Expr::Name(fname), [Expr::Name(name)]) if fname == "len" => {
            IterationFactor::Length(name.clone())
        }
        _ => IterationFactor::UnresolvedLength,
    }
}
