//! Prefix lookups over every table in [`crate::vocab`]: expanding
//! `prefix:local` names and compacting IRIs back into them.

use super::ALL_VOCABULARIES;
use crate::errors::TermError;
use crate::term::NamedNode;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref NAMESPACES: HashMap<&'static str, &'static str> =
        ALL_VOCABULARIES.iter().copied().collect();
    static ref CURIE: Regex = Regex::new(r"^([A-Za-z][A-Za-z0-9_.-]*):(.*)$").unwrap();
}

pub fn namespace_for(prefix: &str) -> Option<&'static str> {
    NAMESPACES.get(prefix).copied()
}

/// All registered `(prefix, namespace)` pairs, sorted by prefix.
pub fn prefixes() -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<_> = NAMESPACES.iter().map(|(p, ns)| (*p, *ns)).collect();
    pairs.sort_unstable();
    pairs
}

/// Expands a prefixed name such as `foaf:name` into a named node.
pub fn expand_curie(curie: &str) -> Result<NamedNode, TermError> {
    let captures = CURIE
        .captures(curie)
        .ok_or_else(|| TermError::InvalidCurie(curie.to_string()))?;
    let prefix = &captures[1];
    let local = &captures[2];
    let namespace =
        namespace_for(prefix).ok_or_else(|| TermError::UnknownPrefix(prefix.to_string()))?;
    Ok(NamedNode::new(format!("{}{}", namespace, local)))
}

/// Compacts an IRI against the longest matching registered namespace.
pub fn compact_iri(iri: &str) -> Option<String> {
    NAMESPACES
        .iter()
        .filter(|(_, ns)| iri.starts_with(**ns))
        .max_by_key(|(_, ns)| ns.len())
        .map(|(prefix, ns)| format!("{}:{}", prefix, &iri[ns.len()..]))
}
