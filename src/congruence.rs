//! Structural equality up to renaming of bound variables.

use crate::subst::alpha_rename;
use crate::types::{Expression, Symbol};
use std::collections::HashMap;

/// Alpha-equivalence of two expressions.
///
/// Symbols must be the same identity. Abstractions must bind the same number
/// of variables with pairwise congruent types; the second body is then
/// renamed onto the first's binder names, positionally, before the bodies
/// are compared. Applications compare function parts and arguments
/// positionally. Mismatched variants are never congruent.
pub fn congruent(e1: &Expression, e2: &Expression) -> bool {
    match (e1, e2) {
        (Expression::Symbol(s1), Expression::Symbol(s2)) => s1 == s2,
        (Expression::Abstraction(a1), Expression::Abstraction(a2)) => {
            if a1.variables.len() != a2.variables.len() {
                return false;
            }
            let types_match = a1
                .variables
                .iter()
                .zip(&a2.variables)
                .all(|(d1, d2)| congruent(&d1.ty, &d2.ty));
            if !types_match {
                return false;
            }
            let renames: HashMap<Symbol, Symbol> = a2
                .variables
                .iter()
                .zip(&a1.variables)
                .map(|(d2, d1)| (d2.name.clone(), d1.name.clone()))
                .collect();
            let body2 = alpha_rename(&a2.body, &renames);
            congruent(&a1.body, &body2)
        }
        (Expression::Application(p1), Expression::Application(p2)) => {
            p1.arguments.len() == p2.arguments.len()
                && congruent(&p1.function, &p2.function)
                && p1
                    .arguments
                    .iter()
                    .zip(&p2.arguments)
                    .all(|(x1, x2)| congruent(x1, x2))
        }
        _ => false,
    }
}
