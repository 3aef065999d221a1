//! Decode atoms into typed values.
//!
//! The lexer keeps token text verbatim. Consumers that need the number or the
//! unescaped string behind an atom decode it here.
use std::fmt;

use ordered_float::OrderedFloat;
use smol_str::SmolStr;

use crate::escape::{escape_string, unescape};
use crate::lexer::{Token, TokenKind};
use crate::tree::Atom;

/// The value denoted by an atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Symbol(SmolStr),
    Int(i64),
    Real(OrderedFloat<f64>),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("integer {0} does not fit in 64 bits")]
    IntOutOfRange(SmolStr),
    #[error("invalid real number {0}")]
    InvalidReal(SmolStr),
    #[error("invalid escape sequence in string {0}")]
    InvalidEscape(SmolStr),
    #[error("a {0} token does not denote a value")]
    NotAnAtom(TokenKind),
}

impl TryFrom<&Token> for Value {
    type Error = ValueError;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let text = token.text();
        match token.kind() {
            TokenKind::Id => Ok(Value::Symbol(text.into())),
            TokenKind::Int => text
                .parse()
                .map(Value::Int)
                .map_err(|_| ValueError::IntOutOfRange(text.into())),
            TokenKind::Real => text
                .parse()
                .map(|real| Value::Real(OrderedFloat(real)))
                .map_err(|_| ValueError::InvalidReal(text.into())),
            TokenKind::String => text
                .strip_prefix('"')
                .and_then(|inner| inner.strip_suffix('"'))
                .and_then(unescape)
                .map(Value::String)
                .ok_or_else(|| ValueError::InvalidEscape(text.into())),
            kind => Err(ValueError::NotAnAtom(kind)),
        }
    }
}

impl Atom {
    /// Decode the token of this atom.
    pub fn value(&self) -> Result<Value, ValueError> {
        Value::try_from(&self.token)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(symbol) => f.write_str(symbol),
            Value::Int(int) => write!(f, "{int}"),
            Value::Real(real) => write!(f, "{:?}", real.into_inner()),
            Value::String(string) => f.write_str(&escape_string(string)),
        }
    }
}
