//! Expression construction helpers.
//!
//! Client layers build axiom types and proof terms through these; the kernel
//! itself never needs them.

use crate::error::{DtkError, DtkResult};
use crate::types::{Abstraction, Application, Declaration, Expression, Symbol, SymbolArena};
use std::collections::HashSet;
use std::sync::Arc;

/// Build an abstraction, rejecting an empty variable list and duplicate
/// binder names at construction time.
pub fn abstraction(
    variables: Vec<Declaration>,
    body: impl Into<Expression>,
) -> DtkResult<Abstraction> {
    if variables.is_empty() {
        return Err(DtkError::Validation {
            field: "variables".to_string(),
            message: "abstraction requires at least one bound variable".to_string(),
        });
    }
    let mut seen = HashSet::new();
    for declaration in &variables {
        if !seen.insert(declaration.name.clone()) {
            return Err(DtkError::DuplicateName {
                symbol: declaration.name.clone(),
            });
        }
    }
    Ok(Abstraction {
        variables,
        body: Arc::new(body.into()),
    })
}

/// Build an abstraction from labelled parameters, handing the freshly
/// minted binder symbols to the body closure.
///
/// The parameter count and the closure's arity are the same `N`, so a
/// body/binder arity mismatch cannot be expressed.
pub fn abstraction_with<const N: usize>(
    symbols: &mut SymbolArena,
    parameters: [(&str, Expression); N],
    body: impl FnOnce(&[Symbol; N]) -> Expression,
) -> DtkResult<Abstraction> {
    let names: [Symbol; N] = std::array::from_fn(|index| symbols.fresh(parameters[index].0));
    let body = body(&names);
    let variables = names
        .iter()
        .zip(parameters)
        .map(|(name, (_, ty))| Declaration::new(name.clone(), ty))
        .collect();
    abstraction(variables, body)
}

/// Build an independent (non-dependent) function type with freshly minted
/// parameter names that never occur in the output.
pub fn function_type(
    symbols: &mut SymbolArena,
    inputs: Vec<Expression>,
    output: impl Into<Expression>,
) -> DtkResult<Abstraction> {
    if inputs.is_empty() {
        return Err(DtkError::Validation {
            field: "inputs".to_string(),
            message: "function type requires at least one input".to_string(),
        });
    }
    let variables = inputs
        .into_iter()
        .enumerate()
        .map(|(index, ty)| Declaration::new(symbols.fresh(format!("var_{index}")), ty))
        .collect();
    abstraction(variables, output)
}

/// Build an application of a function expression to positional arguments.
pub fn apply(function: impl Into<Expression>, arguments: Vec<Expression>) -> Application {
    Application {
        function: Arc::new(function.into()),
        arguments,
    }
}
