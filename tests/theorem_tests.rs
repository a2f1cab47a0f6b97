//! End-to-end proofs checked through the axiom libraries.

use dtk::{
    abstraction, apply, congruent, function_type, Declaration, DtkError, Expression, NatTheory,
    PropLogic, SymbolArena, TypeChecker,
};

// ============================================================================
// Test Fixtures
// ============================================================================

struct Theory {
    symbols: SymbolArena,
    prop: PropLogic,
    nat: NatTheory,
    declarations: Vec<Declaration>,
}

fn theory() -> Theory {
    let mut symbols = SymbolArena::new();
    let prop = PropLogic::new(&mut symbols).expect("prop library");
    let nat = NatTheory::new(&mut symbols, &prop).expect("nat library");
    let mut declarations = prop.declarations().to_vec();
    declarations.extend_from_slice(nat.declarations());
    Theory {
        symbols,
        prop,
        nat,
        declarations,
    }
}

// ============================================================================
// Library Well-Formedness Tests
// ============================================================================

#[test]
fn test_every_library_declaration_is_well_typed() {
    let th = theory();
    let checker = TypeChecker::new(th.symbols.root());
    for index in 0..th.declarations.len() {
        let (context, rest) = th.declarations.split_at(index);
        let declaration = &rest[0];
        checker
            .check(&declaration.ty, context)
            .unwrap_or_else(|error| {
                panic!("declaration '{}' is ill-typed: {}", declaration.name, error)
            });
    }
}

#[test]
fn test_numerals_are_naturals() {
    let th = theory();
    let checker = TypeChecker::new(th.symbols.root());
    for value in [0, 1, 7] {
        let ty = checker
            .check(&th.nat.as_nat(value), &th.declarations)
            .expect("numeral");
        assert_eq!(ty, Expression::from(th.nat.nat.clone()));
    }
}

// ============================================================================
// Axiom Instantiation Tests
// ============================================================================

#[test]
fn test_succ_never_zero_instantiates() {
    let th = theory();
    let checker = TypeChecker::new(th.symbols.root());
    let expr: Expression =
        apply(th.nat.succ_never_zero.clone(), vec![th.nat.as_nat(2)]).into();
    let ty = checker.check(&expr, &th.declarations).expect("instance");
    let expected = th
        .prop
        .negation(th.nat.equal(th.nat.as_nat(3), th.nat.zero.clone()));
    assert!(congruent(&ty, &expected));
}

#[test]
fn test_rewrite_partially_applied_keeps_predicate_binder() {
    let mut th = theory();
    let checker = TypeChecker::new(th.symbols.root());
    let zero = th.nat.as_nat(0);
    let one = th.nat.as_nat(1);

    let expr: Expression = apply(th.nat.rewrite.clone(), vec![zero.clone(), one.clone()]).into();
    let ty = checker.check(&expr, &th.declarations).expect("instance");

    let expected: Expression = {
        let p = th.symbols.fresh("P");
        let p_type = function_type(
            &mut th.symbols,
            vec![th.nat.nat.clone().into()],
            th.prop.prop.clone(),
        )
        .expect("predicate type");
        let conclusion = function_type(
            &mut th.symbols,
            vec![th.nat.equal(zero.clone(), one.clone())],
            th.prop.equivalence(
                apply(p.clone(), vec![zero]),
                apply(p.clone(), vec![one]),
            ),
        )
        .expect("conclusion");
        abstraction(vec![Declaration::new(p, p_type)], conclusion)
            .expect("expected shape")
            .into()
    };
    assert!(congruent(&ty, &expected));
}

#[test]
fn test_axioms_require_exact_argument_counts() {
    let th = theory();
    let checker = TypeChecker::new(th.symbols.root());
    // conclude_from_or takes its proposition and its disjunct one call at a
    // time; flattening both into a single application is an arity error.
    let expr: Expression = apply(
        th.prop.conclude_from_or.clone(),
        vec![th.prop.falsum.clone().into(), th.prop.falsum.clone().into()],
    )
    .into();
    let err = checker
        .check(&expr, &th.declarations)
        .expect_err("flattened application");
    assert!(matches!(
        err,
        DtkError::ArityMismatch {
            expected: 1,
            actual: 2,
            ..
        }
    ));
}

// ============================================================================
// Theorem Tests
// ============================================================================

#[test]
fn test_disjunction_commutes() {
    let mut th = theory();
    let checker = TypeChecker::new(th.symbols.root());

    // forall P Q. Or(P, Q) -> Or(Q, P)
    let statement: Expression = th
        .prop
        .for_all(&mut th.symbols, 2, |symbols, ps| {
            let (p, q) = (ps[0].clone(), ps[1].clone());
            Ok(function_type(
                symbols,
                vec![th.prop.disjunction(p.clone(), q.clone())],
                th.prop.disjunction(q, p),
            )?
            .into())
        })
        .expect("statement")
        .into();

    let proof: Expression = th
        .prop
        .for_all(&mut th.symbols, 2, |symbols, ps| {
            let (p, q) = (ps[0].clone(), ps[1].clone());
            let or_qp = th.prop.disjunction(q.clone(), p.clone());
            let h1 = symbols.fresh("h1");

            // P -> Or(Q, P)
            let h2: Expression = apply(
                th.prop.or_formation_right.clone(),
                vec![q.clone().into(), p.clone().into()],
            )
            .into();
            // Or(Or(Q, P), Q) from h1 by rewriting the left disjunct
            let h4: Expression = apply(
                apply(
                    th.prop.apply_or_left.clone(),
                    vec![p.clone().into(), q.clone().into(), or_qp.clone()],
                ),
                vec![h1.clone().into(), h2],
            )
            .into();
            // Q -> Or(Q, P)
            let h3: Expression = apply(
                th.prop.or_formation_left.clone(),
                vec![q.clone().into(), p.clone().into()],
            )
            .into();
            // Or(Or(Q, P), Or(Q, P)) by rewriting the right disjunct
            let h5: Expression = apply(
                apply(
                    th.prop.apply_or_right.clone(),
                    vec![or_qp.clone(), q.clone().into(), or_qp.clone()],
                ),
                vec![h4, h3],
            )
            .into();
            let conclusion: Expression = apply(
                apply(th.prop.conclude_from_or.clone(), vec![or_qp.clone()]),
                vec![h5],
            )
            .into();

            Ok(abstraction(
                vec![Declaration::new(h1, th.prop.disjunction(p, q))],
                conclusion,
            )?
            .into())
        })
        .expect("proof term")
        .into();

    let ty = checker
        .check(&proof, th.prop.declarations())
        .expect("or commutes");
    assert!(congruent(&ty, &statement));
}

#[test]
fn test_proved_statement_discharges_as_hypothesis() {
    let mut th = theory();
    let checker = TypeChecker::new(th.symbols.root());

    // forall P. P -> P, with its one-line proof.
    let statement: Expression = th
        .prop
        .for_all(&mut th.symbols, 1, |symbols, ps| {
            Ok(function_type(symbols, vec![ps[0].clone().into()], ps[0].clone())?.into())
        })
        .expect("statement")
        .into();
    let proof: Expression = th
        .prop
        .for_all(&mut th.symbols, 1, |symbols, ps| {
            let h = symbols.fresh("h");
            Ok(abstraction(vec![Declaration::new(h.clone(), ps[0].clone())], h)?.into())
        })
        .expect("proof")
        .into();

    // Bind the statement as a hypothesis and discharge it with the proof.
    let identity = th.symbols.fresh("identity");
    let script: Expression = apply(
        abstraction(
            vec![Declaration::new(identity.clone(), statement.clone())],
            identity,
        )
        .expect("script"),
        vec![proof],
    )
    .into();

    let ty = checker
        .check(&script, th.prop.declarations())
        .expect("discharge");
    assert!(congruent(&ty, &statement));
}
