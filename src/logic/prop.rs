//! Propositional logic axiom library.

use crate::builders::{abstraction, apply, function_type};
use crate::error::{DtkError, DtkResult};
use crate::types::{Abstraction, Declaration, Expression, Symbol, SymbolArena};

/// The `Prop` universe, its connectives and the axioms governing them.
///
/// Construction mints every symbol from the supplied arena and records the
/// ordered declaration list that forms the ambient typing context.
#[derive(Debug, Clone)]
pub struct PropLogic {
    pub prop: Symbol,
    pub falsum: Symbol,
    pub not: Symbol,
    pub and: Symbol,
    pub or: Symbol,
    pub iff: Symbol,
    pub false_implies_all: Symbol,
    pub not_implication: Symbol,
    pub not_formation: Symbol,
    pub and_left: Symbol,
    pub and_right: Symbol,
    pub and_formation: Symbol,
    pub apply_or_left: Symbol,
    pub apply_or_right: Symbol,
    pub conclude_from_or: Symbol,
    pub or_formation_left: Symbol,
    pub or_formation_right: Symbol,
    pub excluded_middle: Symbol,
    pub iff_formation: Symbol,
    pub iff_definition: Symbol,
    pub iff_rewrite: Symbol,
    declarations: Vec<Declaration>,
}

impl PropLogic {
    pub fn new(symbols: &mut SymbolArena) -> DtkResult<Self> {
        let prop = symbols.fresh("Prop");
        let falsum = symbols.fresh("False");
        let not = symbols.fresh("Not");
        let and = symbols.fresh("And");
        let or = symbols.fresh("Or");
        let iff = symbols.fresh("Iff");

        let not_of = |p: Expression| Expression::from(apply(not.clone(), vec![p]));
        let and_of =
            |p: Expression, q: Expression| Expression::from(apply(and.clone(), vec![p, q]));
        let or_of = |p: Expression, q: Expression| Expression::from(apply(or.clone(), vec![p, q]));
        let iff_of =
            |p: Expression, q: Expression| Expression::from(apply(iff.clone(), vec![p, q]));

        let mut declarations = vec![
            Declaration::new(prop.clone(), symbols.root()),
            Declaration::new(falsum.clone(), prop.clone()),
        ];
        declarations.push(Declaration::new(
            not.clone(),
            function_type(symbols, vec![prop.clone().into()], prop.clone())?,
        ));
        for connective in [&and, &or, &iff] {
            declarations.push(Declaration::new(
                connective.clone(),
                function_type(
                    symbols,
                    vec![prop.clone().into(), prop.clone().into()],
                    prop.clone(),
                )?,
            ));
        }

        let false_implies_all = symbols.fresh("False implies all");
        declarations.push(Declaration::new(
            false_implies_all.clone(),
            for_all_props(symbols, &prop, 1, |symbols, ps| {
                Ok(function_type(symbols, vec![falsum.clone().into()], ps[0].clone())?.into())
            })?,
        ));

        let not_implication = symbols.fresh("Not implication");
        declarations.push(Declaration::new(
            not_implication.clone(),
            for_all_props(symbols, &prop, 1, |symbols, ps| {
                let p = Expression::from(ps[0].clone());
                let inner = function_type(symbols, vec![p.clone()], falsum.clone())?;
                Ok(function_type(symbols, vec![not_of(p)], inner)?.into())
            })?,
        ));

        let not_formation = symbols.fresh("Not formation");
        declarations.push(Declaration::new(
            not_formation.clone(),
            for_all_props(symbols, &prop, 1, |symbols, ps| {
                let p = Expression::from(ps[0].clone());
                let premise = function_type(symbols, vec![p.clone()], falsum.clone())?;
                Ok(function_type(symbols, vec![premise.into()], not_of(p))?.into())
            })?,
        ));

        let and_left = symbols.fresh("And left");
        declarations.push(Declaration::new(
            and_left.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                Ok(function_type(symbols, vec![and_of(p, q)], ps[0].clone())?.into())
            })?,
        ));

        let and_right = symbols.fresh("And right");
        declarations.push(Declaration::new(
            and_right.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                Ok(function_type(symbols, vec![and_of(p, q)], ps[1].clone())?.into())
            })?,
        ));

        let and_formation = symbols.fresh("And formation");
        declarations.push(Declaration::new(
            and_formation.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                Ok(
                    function_type(symbols, vec![p.clone(), q.clone()], and_of(p, q))?
                        .into(),
                )
            })?,
        ));

        let apply_or_left = symbols.fresh("Apply or left");
        declarations.push(Declaration::new(
            apply_or_left.clone(),
            for_all_props(symbols, &prop, 3, |symbols, ps| {
                let (p, q, r) = (
                    Expression::from(ps[0].clone()),
                    Expression::from(ps[1].clone()),
                    Expression::from(ps[2].clone()),
                );
                let step = function_type(symbols, vec![p.clone()], r.clone())?;
                Ok(function_type(
                    symbols,
                    vec![or_of(p, q.clone()), step.into()],
                    or_of(r, q),
                )?
                .into())
            })?,
        ));

        let apply_or_right = symbols.fresh("Apply or right");
        declarations.push(Declaration::new(
            apply_or_right.clone(),
            for_all_props(symbols, &prop, 3, |symbols, ps| {
                let (p, q, r) = (
                    Expression::from(ps[0].clone()),
                    Expression::from(ps[1].clone()),
                    Expression::from(ps[2].clone()),
                );
                let step = function_type(symbols, vec![q.clone()], r.clone())?;
                Ok(function_type(
                    symbols,
                    vec![or_of(p.clone(), q), step.into()],
                    or_of(p, r),
                )?
                .into())
            })?,
        ));

        let conclude_from_or = symbols.fresh("Conclude from or");
        declarations.push(Declaration::new(
            conclude_from_or.clone(),
            for_all_props(symbols, &prop, 1, |symbols, ps| {
                let p = Expression::from(ps[0].clone());
                Ok(function_type(symbols, vec![or_of(p.clone(), p)], ps[0].clone())?.into())
            })?,
        ));

        let or_formation_left = symbols.fresh("Or formation left");
        declarations.push(Declaration::new(
            or_formation_left.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                Ok(function_type(symbols, vec![p.clone()], or_of(p, q))?.into())
            })?,
        ));

        let or_formation_right = symbols.fresh("Or formation right");
        declarations.push(Declaration::new(
            or_formation_right.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                Ok(function_type(symbols, vec![q.clone()], or_of(p, q))?.into())
            })?,
        ));

        let excluded_middle = symbols.fresh("Excluded middle");
        declarations.push(Declaration::new(
            excluded_middle.clone(),
            for_all_props(symbols, &prop, 1, |_symbols, ps| {
                let p = Expression::from(ps[0].clone());
                Ok(or_of(p.clone(), not_of(p)))
            })?,
        ));

        let iff_formation = symbols.fresh("Iff formation");
        declarations.push(Declaration::new(
            iff_formation.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                let forward = function_type(symbols, vec![p.clone()], q.clone())?;
                let backward = function_type(symbols, vec![q.clone()], p.clone())?;
                Ok(function_type(
                    symbols,
                    vec![and_of(forward.into(), backward.into())],
                    iff_of(p, q),
                )?
                .into())
            })?,
        ));

        let iff_definition = symbols.fresh("Iff definition");
        declarations.push(Declaration::new(
            iff_definition.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                let forward = function_type(symbols, vec![p.clone()], q.clone())?;
                let backward = function_type(symbols, vec![q.clone()], p.clone())?;
                Ok(function_type(
                    symbols,
                    vec![iff_of(p, q)],
                    and_of(forward.into(), backward.into()),
                )?
                .into())
            })?,
        ));

        let iff_rewrite = symbols.fresh("Iff rewrite");
        declarations.push(Declaration::new(
            iff_rewrite.clone(),
            for_all_props(symbols, &prop, 2, |symbols, ps| {
                let (p, q) = (Expression::from(ps[0].clone()), Expression::from(ps[1].clone()));
                let r = symbols.fresh("R");
                let r_type = function_type(symbols, vec![prop.clone().into()], prop.clone())?;
                let conclusion = function_type(
                    symbols,
                    vec![iff_of(p.clone(), q.clone())],
                    iff_of(
                        apply(r.clone(), vec![p]).into(),
                        apply(r.clone(), vec![q]).into(),
                    ),
                )?;
                Ok(abstraction(vec![Declaration::new(r, r_type)], conclusion)?.into())
            })?,
        ));

        Ok(Self {
            prop,
            falsum,
            not,
            and,
            or,
            iff,
            false_implies_all,
            not_implication,
            not_formation,
            and_left,
            and_right,
            and_formation,
            apply_or_left,
            apply_or_right,
            conclude_from_or,
            or_formation_left,
            or_formation_right,
            excluded_middle,
            iff_formation,
            iff_definition,
            iff_rewrite,
            declarations,
        })
    }

    /// The ordered typing context for this library.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn negation(&self, p: impl Into<Expression>) -> Expression {
        apply(self.not.clone(), vec![p.into()]).into()
    }

    pub fn conjunction(&self, p: impl Into<Expression>, q: impl Into<Expression>) -> Expression {
        apply(self.and.clone(), vec![p.into(), q.into()]).into()
    }

    pub fn disjunction(&self, p: impl Into<Expression>, q: impl Into<Expression>) -> Expression {
        apply(self.or.clone(), vec![p.into(), q.into()]).into()
    }

    pub fn equivalence(&self, p: impl Into<Expression>, q: impl Into<Expression>) -> Expression {
        apply(self.iff.clone(), vec![p.into(), q.into()]).into()
    }

    /// Universal quantification over `count` propositions.
    pub fn for_all(
        &self,
        symbols: &mut SymbolArena,
        count: usize,
        build: impl FnOnce(&mut SymbolArena, &[Symbol]) -> DtkResult<Expression>,
    ) -> DtkResult<Abstraction> {
        for_all_props(symbols, &self.prop, count, build)
    }
}

fn for_all_props(
    symbols: &mut SymbolArena,
    prop: &Symbol,
    count: usize,
    build: impl FnOnce(&mut SymbolArena, &[Symbol]) -> DtkResult<Expression>,
) -> DtkResult<Abstraction> {
    if count == 0 {
        return Err(DtkError::Validation {
            field: "count".to_string(),
            message: "quantification needs at least one proposition".to_string(),
        });
    }
    let names: Vec<Symbol> = (0..count)
        .map(|index| symbols.fresh(format!("P{index}")))
        .collect();
    let body = build(symbols, &names)?;
    let variables = names
        .into_iter()
        .map(|name| Declaration::new(name, prop.clone()))
        .collect();
    abstraction(variables, body)
}
