//! Peano arithmetic axiom library.

use crate::builders::{abstraction, apply, function_type};
use crate::error::{DtkError, DtkResult};
use crate::logic::prop::PropLogic;
use crate::types::{Abstraction, Declaration, Expression, Symbol, SymbolArena};

/// Natural numbers with equality and the Peano axioms.
///
/// `Nat` lives in its own universe, itself declared against the root so
/// that universe chains reach the top sort.
#[derive(Debug, Clone)]
pub struct NatTheory {
    pub universe: Symbol,
    pub nat: Symbol,
    pub zero: Symbol,
    pub succ: Symbol,
    pub eq: Symbol,
    pub reflexive: Symbol,
    pub rewrite: Symbol,
    pub succ_never_zero: Symbol,
    pub succ_injective: Symbol,
    declarations: Vec<Declaration>,
}

impl NatTheory {
    pub fn new(symbols: &mut SymbolArena, prop: &PropLogic) -> DtkResult<Self> {
        let universe = symbols.fresh("Nat Universe");
        let nat = symbols.fresh("Nat");
        let zero = symbols.fresh("zero");
        let succ = symbols.fresh("succ");
        let eq = symbols.fresh("=");

        let succ_of = |n: Expression| Expression::from(apply(succ.clone(), vec![n]));
        let eq_of = |x: Expression, y: Expression| Expression::from(apply(eq.clone(), vec![x, y]));

        let mut declarations = vec![
            Declaration::new(universe.clone(), symbols.root()),
            Declaration::new(nat.clone(), universe.clone()),
        ];
        declarations.push(Declaration::new(
            succ.clone(),
            function_type(symbols, vec![nat.clone().into()], nat.clone())?,
        ));
        declarations.push(Declaration::new(zero.clone(), nat.clone()));
        declarations.push(Declaration::new(
            eq.clone(),
            function_type(
                symbols,
                vec![nat.clone().into(), nat.clone().into()],
                prop.prop.clone(),
            )?,
        ));

        let reflexive = symbols.fresh("reflexive");
        declarations.push(Declaration::new(
            reflexive.clone(),
            for_all_nats(symbols, &nat, 1, |_symbols, ns| {
                Ok(eq_of(ns[0].clone().into(), ns[0].clone().into()))
            })?,
        ));

        let rewrite = symbols.fresh("rewrite");
        declarations.push(Declaration::new(
            rewrite.clone(),
            for_all_nats(symbols, &nat, 2, |symbols, ns| {
                let (a, b) = (Expression::from(ns[0].clone()), Expression::from(ns[1].clone()));
                let p = symbols.fresh("P");
                let p_type =
                    function_type(symbols, vec![nat.clone().into()], prop.prop.clone())?;
                let conclusion = function_type(
                    symbols,
                    vec![eq_of(a.clone(), b.clone())],
                    prop.equivalence(
                        apply(p.clone(), vec![a]),
                        apply(p.clone(), vec![b]),
                    ),
                )?;
                Ok(abstraction(vec![Declaration::new(p, p_type)], conclusion)?.into())
            })?,
        ));

        let succ_never_zero = symbols.fresh("succ never zero");
        declarations.push(Declaration::new(
            succ_never_zero.clone(),
            for_all_nats(symbols, &nat, 1, |_symbols, ns| {
                Ok(prop.negation(eq_of(
                    succ_of(ns[0].clone().into()),
                    zero.clone().into(),
                )))
            })?,
        ));

        let succ_injective = symbols.fresh("succ injective");
        declarations.push(Declaration::new(
            succ_injective.clone(),
            for_all_nats(symbols, &nat, 2, |symbols, ns| {
                let (n, m) = (Expression::from(ns[0].clone()), Expression::from(ns[1].clone()));
                Ok(function_type(
                    symbols,
                    vec![eq_of(succ_of(n.clone()), succ_of(m.clone()))],
                    eq_of(n, m),
                )?
                .into())
            })?,
        ));

        Ok(Self {
            universe,
            nat,
            zero,
            succ,
            eq,
            reflexive,
            rewrite,
            succ_never_zero,
            succ_injective,
            declarations,
        })
    }

    /// The ordered typing context for this library; assumes the owning
    /// `PropLogic` declarations precede it.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn equal(&self, x: impl Into<Expression>, y: impl Into<Expression>) -> Expression {
        apply(self.eq.clone(), vec![x.into(), y.into()]).into()
    }

    pub fn succ_of(&self, n: impl Into<Expression>) -> Expression {
        apply(self.succ.clone(), vec![n.into()]).into()
    }

    /// The numeral for `value` as an iterated successor of zero.
    pub fn as_nat(&self, value: u64) -> Expression {
        let mut expression = Expression::from(self.zero.clone());
        for _ in 0..value {
            expression = self.succ_of(expression);
        }
        expression
    }

    /// Universal quantification over `count` natural numbers.
    pub fn for_all(
        &self,
        symbols: &mut SymbolArena,
        count: usize,
        build: impl FnOnce(&mut SymbolArena, &[Symbol]) -> DtkResult<Expression>,
    ) -> DtkResult<Abstraction> {
        for_all_nats(symbols, &self.nat, count, build)
    }
}

fn for_all_nats(
    symbols: &mut SymbolArena,
    nat: &Symbol,
    count: usize,
    build: impl FnOnce(&mut SymbolArena, &[Symbol]) -> DtkResult<Expression>,
) -> DtkResult<Abstraction> {
    if count == 0 {
        return Err(DtkError::Validation {
            field: "count".to_string(),
            message: "quantification needs at least one natural number".to_string(),
        });
    }
    let names: Vec<Symbol> = (0..count)
        .map(|index| symbols.fresh(format!("n{index}")))
        .collect();
    let body = build(symbols, &names)?;
    let variables = names
        .into_iter()
        .map(|name| Declaration::new(name, nat.clone()))
        .collect();
    abstraction(variables, body)
}
