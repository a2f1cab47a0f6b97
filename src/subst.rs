//! Alpha-renaming and simultaneous beta-substitution.

use crate::types::{Abstraction, Application, Declaration, Expression, Symbol};
use std::collections::HashMap;
use std::sync::Arc;

/// Replace every occurrence of a renamed symbol, including binder names and
/// the types of nested parameters.
///
/// Used to canonicalize bound-variable identities before structural
/// comparison; a name absent from `renames` passes through untouched.
pub fn alpha_rename(expression: &Expression, renames: &HashMap<Symbol, Symbol>) -> Expression {
    match expression {
        Expression::Symbol(symbol) => Expression::Symbol(
            renames
                .get(symbol)
                .cloned()
                .unwrap_or_else(|| symbol.clone()),
        ),
        Expression::Abstraction(abstraction) => Expression::Abstraction(Abstraction {
            variables: abstraction
                .variables
                .iter()
                .map(|declaration| Declaration {
                    name: renames
                        .get(&declaration.name)
                        .cloned()
                        .unwrap_or_else(|| declaration.name.clone()),
                    ty: alpha_rename(&declaration.ty, renames),
                })
                .collect(),
            body: Arc::new(alpha_rename(&abstraction.body, renames)),
        }),
        Expression::Application(application) => Expression::Application(Application {
            function: Arc::new(alpha_rename(&application.function, renames)),
            arguments: application
                .arguments
                .iter()
                .map(|argument| alpha_rename(argument, renames))
                .collect(),
        }),
    }
}

/// Substitute every bound name by its value throughout `expression` in one
/// simultaneous pass.
///
/// Simultaneity matters: iterating one name at a time could re-capture
/// names introduced by an earlier substitution's value.
///
/// An abstraction whose entire variable list is covered by `bindings`
/// collapses to its substituted body, which is how a Pi type's result is
/// derived on full application. With partial cover the consumed variables
/// are dropped and a smaller abstraction remains, with substitution still
/// applied to the retained parameters' types; this is what makes a partial
/// application of an axiom type-check to a smaller Pi type.
pub fn beta_reduce(expression: &Expression, bindings: &HashMap<Symbol, Expression>) -> Expression {
    match expression {
        Expression::Symbol(symbol) => bindings
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| expression.clone()),
        Expression::Abstraction(abstraction) => {
            let covered = abstraction
                .variables
                .iter()
                .all(|declaration| bindings.contains_key(&declaration.name));
            // An empty variable list counts as fully covered.
            if covered {
                return beta_reduce(&abstraction.body, bindings);
            }
            Expression::Abstraction(Abstraction {
                variables: abstraction
                    .variables
                    .iter()
                    .filter(|declaration| !bindings.contains_key(&declaration.name))
                    .map(|declaration| Declaration {
                        name: declaration.name.clone(),
                        ty: beta_reduce(&declaration.ty, bindings),
                    })
                    .collect(),
                body: Arc::new(beta_reduce(&abstraction.body, bindings)),
            })
        }
        Expression::Application(application) => Expression::Application(Application {
            function: Arc::new(beta_reduce(&application.function, bindings)),
            arguments: application
                .arguments
                .iter()
                .map(|argument| beta_reduce(argument, bindings))
                .collect(),
        }),
    }
}
