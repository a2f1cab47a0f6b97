//! Core term representation for DTK.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

/// An opaque, globally unique identity token.
///
/// Two symbols compare equal only when they are the same minted identity;
/// the display label carries no identity at all, so two binders labelled
/// `"x"` never collide.
#[derive(Debug, Clone, Serialize)]
pub struct Symbol {
    id: u64,
    label: Arc<str>,
}

impl Symbol {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Fresh-symbol generator owning the root universe sentinel.
///
/// All symbols of one checking session come from one arena; ids are
/// monotonically increasing and id 0 is reserved for the root universe.
#[derive(Debug, Clone)]
pub struct SymbolArena {
    next_id: u64,
    root: Symbol,
}

impl SymbolArena {
    pub fn new() -> Self {
        let root = Symbol {
            id: 0,
            label: Arc::from("Type"),
        };
        Self { next_id: 1, root }
    }

    /// The sentinel top sort classifying every universe.
    pub fn root(&self) -> Symbol {
        self.root.clone()
    }

    /// Mint a symbol distinct from every other symbol of this arena.
    pub fn fresh(&mut self, label: impl Into<Arc<str>>) -> Symbol {
        let symbol = Symbol {
            id: self.next_id,
            label: label.into(),
        };
        self.next_id += 1;
        symbol
    }
}

impl Default for SymbolArena {
    fn default() -> Self {
        Self::new()
    }
}

/// One binding of a typing context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub name: Symbol,
    pub ty: Expression,
}

impl Declaration {
    pub fn new(name: Symbol, ty: impl Into<Expression>) -> Self {
        Self {
            name,
            ty: ty.into(),
        }
    }
}

/// A term of the calculus.
///
/// An `Abstraction` is read as a function value or as a dependent (Pi)
/// function type depending on where it occurs; there is no separate type
/// syntax. Expressions are immutable trees with shared unaffected subtrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Symbol(Symbol),
    Abstraction(Abstraction),
    Application(Application),
}

impl Expression {
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expression::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_abstraction(&self) -> Option<&Abstraction> {
        match self {
            Expression::Abstraction(abstraction) => Some(abstraction),
            _ => None,
        }
    }

    pub fn as_application(&self) -> Option<&Application> {
        match self {
            Expression::Application(application) => Some(application),
            _ => None,
        }
    }
}

/// An ordered list of bound declarations over a body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Abstraction {
    pub variables: Vec<Declaration>,
    pub body: Arc<Expression>,
}

/// A function expression applied to positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub function: Arc<Expression>,
    pub arguments: Vec<Expression>,
}

impl From<Symbol> for Expression {
    fn from(symbol: Symbol) -> Self {
        Expression::Symbol(symbol)
    }
}

impl From<Abstraction> for Expression {
    fn from(abstraction: Abstraction) -> Self {
        Expression::Abstraction(abstraction)
    }
}

impl From<Application> for Expression {
    fn from(application: Application) -> Self {
        Expression::Application(application)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Symbol(symbol) => write!(f, "{}", symbol),
            Expression::Abstraction(abstraction) => write!(f, "{}", abstraction),
            Expression::Application(application) => write!(f, "{}", application),
        }
    }
}

impl fmt::Display for Abstraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, declaration) in self.variables.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", declaration.name, declaration.ty)?;
        }
        write!(f, ") -> {}", self.body)
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function.as_ref() {
            Expression::Abstraction(_) => write!(f, "({})", self.function)?,
            _ => write!(f, "{}", self.function)?,
        }
        write!(f, "(")?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}

/// Compute a deterministic structural digest for an expression.
///
/// Symbols contribute their minted ids, so the digest is stable within one
/// arena's session but is not alpha-invariant.
pub fn term_digest(expression: &Expression) -> String {
    let value = serde_json::to_value(expression).unwrap_or(serde_json::Value::Null);
    let serialized = canonical_json(&value);
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Produce canonical JSON with deterministic key ordering.
fn canonical_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            let pairs: Vec<String> = keys
                .into_iter()
                .map(|k| {
                    format!(
                        "{}:{}",
                        serde_json::to_string(k).unwrap_or_default(),
                        canonical_json(&map[k])
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        _ => serde_json::to_string(value).unwrap_or_else(|_| "null".to_string()),
    }
}
