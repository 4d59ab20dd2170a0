//! Defines constant NamedNodes for the datatypes the term model itself relies on.
//! The full vocabulary tables live in [`crate::vocab`].

use crate::term::NamedNode;

pub const XSD_STRING_IRI: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const RDF_LANG_STRING_IRI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

pub const XSD_STRING: NamedNode = NamedNode::new_static(XSD_STRING_IRI);
pub const RDF_LANG_STRING: NamedNode = NamedNode::new_static(RDF_LANG_STRING_IRI);

// prefix for labels handed out by factories that were not given one
pub const BLANK_NODE_PREFIX_STEM: &str = "df_";
