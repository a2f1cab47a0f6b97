//! DTK - Dependent Type Kernel
//!
//! Core modules for type checking a minimal dependently typed lambda
//! calculus: an expression model over opaque unique symbols, simultaneous
//! capture-respecting substitution, alpha-equivalence, and a bidirectional
//! checker with universe-chain subtyping.

pub mod builders;
pub mod congruence;
pub mod engine;
pub mod error;
pub mod logic;
pub mod subst;
pub mod types;

pub use builders::{abstraction, abstraction_with, apply, function_type};
pub use congruence::congruent;
pub use engine::{CheckerConfig, TypeChecker};
pub use error::{DtkError, DtkResult};
pub use logic::{NatTheory, PropLogic};
pub use subst::{alpha_rename, beta_reduce};
pub use types::{
    term_digest, Abstraction, Application, Declaration, Expression, Symbol, SymbolArena,
};
