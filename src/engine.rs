//! Bidirectional type-checking engine for DTK.

use crate::congruence::congruent;
use crate::error::{DtkError, DtkResult};
use crate::subst::beta_reduce;
use crate::types::{Abstraction, Application, Declaration, Expression, Symbol};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Configuration for type checker resource limits.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub max_depth: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self { max_depth: 4096 }
    }
}

/// Type checker over a fixed root universe.
///
/// Purely recursive with no retained state between calls; contexts are
/// extended by copy, never mutated in place.
#[derive(Debug, Clone)]
pub struct TypeChecker {
    root: Symbol,
    config: CheckerConfig,
}

impl TypeChecker {
    /// Create a checker with default configuration.
    pub fn new(root: Symbol) -> Self {
        Self {
            root,
            config: CheckerConfig::default(),
        }
    }

    /// Create a checker with custom configuration.
    pub fn with_config(root: Symbol, config: CheckerConfig) -> Self {
        Self { root, config }
    }

    /// Infer the unique type of an expression in the given context.
    ///
    /// The type of an abstraction is the Pi type binding the same
    /// parameters over the body's inferred type. The type of an
    /// application is the function type's body under simultaneous
    /// substitution of every parameter by its argument.
    pub fn check(
        &self,
        expression: &Expression,
        declarations: &[Declaration],
    ) -> DtkResult<Expression> {
        self.check_at(expression, declarations, 0)
    }

    /// The ascending chain `[e, type(e), type(type(e)), ...]` terminating at
    /// the root universe.
    pub fn type_chain(
        &self,
        expression: &Expression,
        declarations: &[Declaration],
    ) -> DtkResult<Vec<Expression>> {
        self.chain_at(expression, declarations, 0)
    }

    fn check_at(
        &self,
        expression: &Expression,
        declarations: &[Declaration],
        depth: usize,
    ) -> DtkResult<Expression> {
        if depth > self.config.max_depth {
            return Err(DtkError::ResourceLimit {
                resource: "recursion depth".to_string(),
                limit: self.config.max_depth,
                actual: depth,
            });
        }
        match expression {
            Expression::Symbol(symbol) => {
                // The root universe classifies itself.
                if *symbol == self.root {
                    return Ok(expression.clone());
                }
                declarations
                    .iter()
                    .find(|declaration| declaration.name == *symbol)
                    .map(|declaration| declaration.ty.clone())
                    .ok_or_else(|| DtkError::UndeclaredSymbol {
                        symbol: symbol.clone(),
                    })
            }
            Expression::Abstraction(abstraction) => {
                self.check_abstraction(abstraction, declarations, depth)
            }
            Expression::Application(application) => {
                self.check_application(application, declarations, depth)
            }
        }
    }

    fn check_abstraction(
        &self,
        abstraction: &Abstraction,
        declarations: &[Declaration],
        depth: usize,
    ) -> DtkResult<Expression> {
        let mut extended = declarations.to_vec();
        let mut bound: HashSet<Symbol> = declarations
            .iter()
            .map(|declaration| declaration.name.clone())
            .collect();
        for declaration in &abstraction.variables {
            if !bound.insert(declaration.name.clone()) {
                return Err(DtkError::DuplicateName {
                    symbol: declaration.name.clone(),
                });
            }
            // A dependent parameter's type must itself be well formed under
            // the bindings admitted so far.
            if !self.is_root(&declaration.ty) {
                self.check_at(&declaration.ty, &extended, depth + 1)?;
            }
            extended.push(declaration.clone());
        }
        let body_type = self.check_at(&abstraction.body, &extended, depth + 1)?;
        Ok(Expression::Abstraction(Abstraction {
            variables: abstraction.variables.clone(),
            body: Arc::new(body_type),
        }))
    }

    fn check_application(
        &self,
        application: &Application,
        declarations: &[Declaration],
        depth: usize,
    ) -> DtkResult<Expression> {
        let function_type = self.check_at(&application.function, declarations, depth + 1)?;
        let signature = match function_type {
            Expression::Abstraction(abstraction) => abstraction,
            other => {
                return Err(DtkError::NotApplicable {
                    function: (*application.function).clone(),
                    found: other,
                })
            }
        };
        if application.arguments.len() != signature.variables.len() {
            return Err(DtkError::ArityMismatch {
                expected: signature.variables.len(),
                actual: application.arguments.len(),
                function: (*application.function).clone(),
            });
        }
        // Left to right, so the first positional failure is the one reported.
        let mut bindings: HashMap<Symbol, Expression> = HashMap::new();
        for (parameter, argument) in signature.variables.iter().zip(&application.arguments) {
            let chain = self.chain_at(argument, declarations, depth + 1)?;
            if !chain.iter().any(|ty| congruent(ty, &parameter.ty)) {
                return Err(DtkError::TypeMismatch {
                    parameter: parameter.ty.clone(),
                    argument: argument.clone(),
                    chain,
                });
            }
            bindings.insert(parameter.name.clone(), argument.clone());
        }
        Ok(beta_reduce(&Expression::Abstraction(signature), &bindings))
    }

    fn chain_at(
        &self,
        expression: &Expression,
        declarations: &[Declaration],
        depth: usize,
    ) -> DtkResult<Vec<Expression>> {
        if depth > self.config.max_depth {
            return Err(DtkError::ResourceLimit {
                resource: "recursion depth".to_string(),
                limit: self.config.max_depth,
                actual: depth,
            });
        }
        if self.is_root(expression) {
            return Ok(vec![expression.clone()]);
        }
        let ty = self.check_at(expression, declarations, depth + 1)?;
        if self.is_root(&ty) {
            return Ok(vec![expression.clone(), ty]);
        }
        // A self-classifying type ends the chain; function types over the
        // root universe are their own type.
        if congruent(expression, &ty) {
            return Ok(vec![expression.clone()]);
        }
        let mut chain = vec![expression.clone()];
        chain.extend(self.chain_at(&ty, declarations, depth + 1)?);
        Ok(chain)
    }

    fn is_root(&self, expression: &Expression) -> bool {
        matches!(expression, Expression::Symbol(symbol) if *symbol == self.root)
    }
}
