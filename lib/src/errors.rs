//! Errors raised while cloning foreign terms or resolving vocabulary prefixes.

use crate::term::{QuadPosition, TermType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// The term carried a discriminator that names none of the term kinds.
    UnknownTermType(String),
    /// The term carried no discriminator at all.
    MissingTermType,
    /// A quad was expected but the term is of another kind.
    NotAQuad(String),
    /// The term's value is missing or is not a string.
    InvalidValue(TermType),
    /// A quad-shaped value is missing one of its four components.
    MissingQuadComponent(QuadPosition),
    /// The text is not of the form `prefix:local`.
    InvalidCurie(String),
    /// No vocabulary table is registered under this prefix.
    UnknownPrefix(String),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::UnknownTermType(t) => write!(f, "Unknown term type: {}", t),
            TermError::MissingTermType => write!(f, "Term has no term type"),
            TermError::NotAQuad(t) => write!(f, "Expected a Quad but found {}", t),
            TermError::InvalidValue(t) => write!(f, "{} has no string value", t),
            TermError::MissingQuadComponent(pos) => {
                write!(f, "Quad is missing its {} component", pos)
            }
            TermError::InvalidCurie(c) => write!(f, "Not a prefixed name: {}", c),
            TermError::UnknownPrefix(p) => write!(f, "Unknown vocabulary prefix: {}", p),
        }
    }
}

impl std::error::Error for TermError {}
