//! Property tests for substitution and congruence.

use dtk::{alpha_rename, beta_reduce, congruent, Declaration, Expression, Symbol, SymbolArena};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// A symbol-free blueprint for an expression; indices pick from a fixed
/// symbol pool so shrinking stays meaningful.
#[derive(Debug, Clone)]
enum Shape {
    Var(prop::sample::Index),
    Abs(Vec<(prop::sample::Index, Shape)>, Box<Shape>),
    App(Box<Shape>, Vec<Shape>),
}

impl Shape {
    fn build(&self, pool: &[Symbol]) -> Expression {
        match self {
            Shape::Var(index) => index.get(pool).clone().into(),
            Shape::Abs(variables, body) => dtk::Abstraction {
                variables: variables
                    .iter()
                    .map(|(index, ty)| {
                        Declaration::new(index.get(pool).clone(), ty.build(pool))
                    })
                    .collect(),
                body: Arc::new(body.build(pool)),
            }
            .into(),
            Shape::App(function, arguments) => dtk::Application {
                function: Arc::new(function.build(pool)),
                arguments: arguments.iter().map(|shape| shape.build(pool)).collect(),
            }
            .into(),
        }
    }
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = any::<prop::sample::Index>().prop_map(Shape::Var);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (
                prop::collection::vec((any::<prop::sample::Index>(), inner.clone()), 1..3),
                inner.clone(),
            )
                .prop_map(|(variables, body)| Shape::Abs(variables, Box::new(body))),
            (inner.clone(), prop::collection::vec(inner, 1..3))
                .prop_map(|(function, arguments)| Shape::App(Box::new(function), arguments)),
        ]
    })
}

fn pool() -> (SymbolArena, Vec<Symbol>) {
    let mut symbols = SymbolArena::new();
    let pool = ["a", "b", "c", "f", "g", "x"]
        .iter()
        .map(|label| symbols.fresh(*label))
        .collect();
    (symbols, pool)
}

proptest! {
    #[test]
    fn prop_congruence_is_reflexive(shape in shape_strategy()) {
        let (_, pool) = pool();
        let expr = shape.build(&pool);
        prop_assert!(congruent(&expr, &expr));
    }

    #[test]
    fn prop_empty_rename_is_identity(shape in shape_strategy()) {
        let (_, pool) = pool();
        let expr = shape.build(&pool);
        prop_assert_eq!(alpha_rename(&expr, &HashMap::new()), expr);
    }

    #[test]
    fn prop_identity_rename_is_identity(shape in shape_strategy()) {
        let (_, pool) = pool();
        let expr = shape.build(&pool);
        let renames: HashMap<Symbol, Symbol> = pool
            .iter()
            .map(|symbol| (symbol.clone(), symbol.clone()))
            .collect();
        prop_assert_eq!(alpha_rename(&expr, &renames), expr);
    }

    #[test]
    fn prop_empty_bindings_reduce_to_self(shape in shape_strategy()) {
        let (_, pool) = pool();
        let expr = shape.build(&pool);
        prop_assert_eq!(beta_reduce(&expr, &HashMap::new()), expr);
    }

    #[test]
    fn prop_renaming_binders_preserves_congruence(shape in shape_strategy()) {
        let (mut symbols, pool) = pool();
        let body = shape.build(&pool);
        let binder = pool[5].clone();
        let lambda: Expression = dtk::Abstraction {
            variables: vec![Declaration::new(binder.clone(), pool[0].clone())],
            body: Arc::new(body),
        }
        .into();

        let fresh = symbols.fresh("renamed");
        let mut renames = HashMap::new();
        renames.insert(binder, fresh);
        let renamed = alpha_rename(&lambda, &renames);
        prop_assert!(congruent(&lambda, &renamed));
    }

    #[test]
    fn prop_single_binder_identity_reduces_to_argument(shape in shape_strategy()) {
        let (mut symbols, pool) = pool();
        let argument = shape.build(&pool);
        let x = symbols.fresh("v");
        let identity: Expression = dtk::Abstraction {
            variables: vec![Declaration::new(x.clone(), pool[0].clone())],
            body: Arc::new(x.clone().into()),
        }
        .into();

        let mut bindings = HashMap::new();
        bindings.insert(x, argument.clone());
        prop_assert_eq!(beta_reduce(&identity, &bindings), argument);
    }
}
