//! Axiom libraries built on top of the kernel.
//!
//! These layers only mint symbols, build declaration lists and expressions;
//! the kernel never inspects their provenance.

pub mod nat;
pub mod prop;

pub use nat::NatTheory;
pub use prop::PropLogic;
