//! Error types for DTK.

use crate::types::{Expression, Symbol};
use std::fmt;

/// Unified error type for all DTK operations.
///
/// Every checking failure is fatal to the enclosing call; the kernel is a
/// pure validator with no local recovery.
#[derive(Debug, Clone)]
pub enum DtkError {
    /// A referenced symbol has no entry in the typing context
    UndeclaredSymbol { symbol: Symbol },
    /// An abstraction introduces a name already bound in its extended context
    DuplicateName { symbol: Symbol },
    /// An application's function position has a non-function type
    NotApplicable {
        function: Expression,
        found: Expression,
    },
    /// An application's argument count differs from the parameter count
    ArityMismatch {
        expected: usize,
        actual: usize,
        function: Expression,
    },
    /// No element of the argument's type chain matches the parameter type
    TypeMismatch {
        parameter: Expression,
        argument: Expression,
        chain: Vec<Expression>,
    },
    /// Construction-time validation error with field context
    Validation { field: String, message: String },
    /// Resource limit exceeded
    ResourceLimit {
        resource: String,
        limit: usize,
        actual: usize,
    },
}

impl fmt::Display for DtkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredSymbol { symbol } => {
                write!(f, "undeclared symbol '{}'", symbol)
            }
            Self::DuplicateName { symbol } => {
                write!(f, "duplicate name '{}' in extended context", symbol)
            }
            Self::NotApplicable { function, found } => {
                write!(
                    f,
                    "cannot apply '{}': its type '{}' is not a function type",
                    function, found
                )
            }
            Self::ArityMismatch {
                expected,
                actual,
                function,
            } => {
                write!(
                    f,
                    "arity mismatch applying '{}': expected {} arguments, got {}",
                    function, expected, actual
                )
            }
            Self::TypeMismatch {
                parameter,
                argument,
                chain,
            } => {
                write!(
                    f,
                    "type mismatch: no type of '{}' (chain length {}) matches parameter type '{}'",
                    argument,
                    chain.len(),
                    parameter
                )
            }
            Self::Validation { field, message } => {
                write!(f, "validation error on '{}': {}", field, message)
            }
            Self::ResourceLimit {
                resource,
                limit,
                actual,
            } => {
                write!(f, "{} limit exceeded: {} > {}", resource, actual, limit)
            }
        }
    }
}

impl std::error::Error for DtkError {}

/// Result type alias for DTK operations.
pub type DtkResult<T> = Result<T, DtkError>;
