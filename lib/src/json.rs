//! Plain-JSON form of RDF/JS terms.
//!
//! A term is an object with `termType` and `value`; literals add `language`
//! and a nested `datatype` object, quads add nested `subject`, `predicate`,
//! `object` and `graph` objects. `serde_json::Value` implements [`RdfTerm`],
//! so JSON terms compare with `equals` and clone with `from_term` directly.

use crate::config::DataFactoryOptions;
use crate::consts::{RDF_LANG_STRING_IRI, XSD_STRING_IRI};
use crate::errors::TermError;
use crate::factory::{DataFactory, PrefixSequence};
use crate::term::{NamedNode, Quad, QuadPosition, RdfTerm, Term, TermType};
use lazy_static::lazy_static;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

impl RdfTerm for Value {
    fn term_type_tag(&self) -> Option<&str> {
        self.get("termType").and_then(Value::as_str)
    }

    fn value(&self) -> &str {
        self.get("value").and_then(Value::as_str).unwrap_or("")
    }

    fn language(&self) -> &str {
        self.get("language").and_then(Value::as_str).unwrap_or("")
    }

    // accepts both a nested NamedNode object and a bare IRI string; a literal
    // without either gets the datatype its language implies
    fn datatype(&self) -> Option<&str> {
        match self.get("datatype") {
            Some(Value::String(iri)) => Some(iri.as_str()),
            Some(datatype) => datatype.get("value").and_then(Value::as_str),
            None if self.term_type_tag() == Some(TermType::Literal.as_str()) => {
                if RdfTerm::language(self).is_empty() {
                    Some(XSD_STRING_IRI)
                } else {
                    Some(RDF_LANG_STRING_IRI)
                }
            }
            None => None,
        }
    }

    fn quad_component(&self, position: QuadPosition) -> Option<&dyn RdfTerm> {
        let component: &dyn RdfTerm = self.get(position.as_str())?;
        Some(component)
    }
}

fn named_node_json(node: &NamedNode) -> Value {
    json!({
        "termType": TermType::NamedNode.as_str(),
        "value": node.value(),
    })
}

lazy_static! {
    // cloning out of JSON never generates labels, so the prefix is irrelevant
    static ref JSON_FACTORY: DataFactory = DataFactory::with_options(
        DataFactoryOptions {
            blank_node_prefix: Some(String::new()),
        },
        PrefixSequence::global(),
    );
}

fn json_factory() -> &'static DataFactory {
    &JSON_FACTORY
}

/// Rejects terms whose `value` is missing or not a string, recursing into
/// quad components and literal datatypes. Unknown tags are left for
/// `from_term` to report.
fn check_values(value: &Value) -> Result<(), TermError> {
    let term_type = match value.term_type_tag().map(str::parse::<TermType>) {
        Some(Ok(term_type)) => term_type,
        Some(Err(_)) => return Ok(()),
        None => TermType::Quad,
    };
    match term_type {
        TermType::Quad => {
            for position in QuadPosition::ALL {
                if let Some(component) = value.get(position.as_str()) {
                    check_values(component)?;
                }
            }
            Ok(())
        }
        TermType::DefaultGraph => Ok(()),
        other => {
            if !value.get("value").map_or(false, Value::is_string) {
                return Err(TermError::InvalidValue(other));
            }
            match value.get("datatype") {
                Some(datatype @ Value::Object(_))
                    if !datatype.get("value").map_or(false, Value::is_string) =>
                {
                    Err(TermError::InvalidValue(TermType::NamedNode))
                }
                _ => Ok(()),
            }
        }
    }
}

impl Term {
    pub fn to_json(&self) -> Value {
        match self {
            Term::NamedNode(node) => named_node_json(node),
            Term::Literal(literal) => json!({
                "termType": TermType::Literal.as_str(),
                "value": literal.value(),
                "language": literal.language(),
                "datatype": named_node_json(literal.datatype()),
            }),
            Term::Quad(quad) => quad.to_json(),
            other => json!({
                "termType": other.term_type().as_str(),
                "value": other.value(),
            }),
        }
    }

    pub fn from_json(value: &Value) -> Result<Term, TermError> {
        check_values(value)?;
        json_factory().from_term(value)
    }
}

impl Quad {
    pub fn to_json(&self) -> Value {
        json!({
            "termType": TermType::Quad.as_str(),
            "value": "",
            "subject": self.subject().to_json(),
            "predicate": self.predicate().to_json(),
            "object": self.object().to_json(),
            "graph": self.graph().to_json(),
        })
    }

    pub fn from_json(value: &Value) -> Result<Quad, TermError> {
        check_values(value)?;
        json_factory().from_quad(value)
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Term::from_json(&value).map_err(D::Error::custom)
    }
}

impl Serialize for Quad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quad {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Quad::from_json(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{BlankNode, DefaultGraph, Literal, Variable};

    fn sample_quad() -> Quad {
        Quad::new(
            BlankNode::new("b0"),
            NamedNode::new("http://xmlns.com/foaf/0.1/age"),
            Literal::new_typed(
                "42",
                NamedNode::new("http://www.w3.org/2001/XMLSchema#integer"),
            ),
            NamedNode::new("http://example.org/graph"),
        )
    }

    #[test]
    fn literal_json_nests_the_datatype() {
        let literal: Term = Literal::new_language_tagged("hi", "en").into();
        assert_eq!(
            literal.to_json(),
            json!({
                "termType": "Literal",
                "value": "hi",
                "language": "en",
                "datatype": {
                    "termType": "NamedNode",
                    "value": "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString",
                },
            })
        );
    }

    #[test]
    fn default_graph_json() {
        let graph: Term = DefaultGraph::instance().into();
        assert_eq!(
            graph.to_json(),
            json!({"termType": "DefaultGraph", "value": ""})
        );
    }

    #[test]
    fn serde_round_trip() {
        let quad = sample_quad();
        let text = serde_json::to_string(&quad).unwrap();
        let back: Quad = serde_json::from_str(&text).unwrap();
        assert_eq!(back, quad);

        let var: Term = Variable::new("x").into();
        let back: Term = serde_json::from_str(&serde_json::to_string(&var).unwrap()).unwrap();
        assert_eq!(back, var);
    }

    #[test]
    fn json_values_compare_with_native_terms() {
        let quad = sample_quad();
        let value = quad.to_json();
        assert!(quad.equals(Some(&value)));
        assert!(value.equals(Some(&quad)));

        // legacy quad objects carry no termType
        let mut legacy = value.clone();
        legacy.as_object_mut().unwrap().remove("termType");
        assert!(quad.equals(Some(&legacy)));
        assert_eq!(Quad::from_json(&legacy).unwrap(), quad);
        assert_eq!(Term::from_json(&legacy), Err(TermError::MissingTermType));
    }

    #[test]
    fn bare_string_datatype_is_accepted() {
        let value = json!({
            "termType": "Literal",
            "value": "1.5",
            "datatype": "http://www.w3.org/2001/XMLSchema#decimal",
        });
        let term = Term::from_json(&value).unwrap();
        assert_eq!(
            term.as_literal().unwrap().datatype().value(),
            "http://www.w3.org/2001/XMLSchema#decimal"
        );
    }

    #[test]
    fn literals_without_a_datatype_round_trip() {
        let df = DataFactory::with_sequence(&PrefixSequence::new());
        for foreign in [
            json!({"termType": "Literal", "value": "a", "language": ""}),
            json!({"termType": "Literal", "value": "a", "language": "en"}),
            json!({"termType": "Literal", "value": "a"}),
        ] {
            let cloned = df.from_term(&foreign).unwrap();
            assert!(cloned.equals(Some(&foreign)), "{} != {}", cloned, foreign);
            assert!(foreign.equals(Some(&cloned)));
        }

        let tagged = json!({"termType": "Literal", "value": "a", "language": "en"});
        assert_eq!(tagged.datatype(), Some(RDF_LANG_STRING_IRI));
        let node = json!({"termType": "NamedNode", "value": "http://example.org/a"});
        assert_eq!(node.datatype(), None);
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert_eq!(
            Term::from_json(&json!({"termType": "NamedNode", "value": 5})),
            Err(TermError::InvalidValue(TermType::NamedNode))
        );
        assert_eq!(
            Term::from_json(&json!({"termType": "Variable"})),
            Err(TermError::InvalidValue(TermType::Variable))
        );
        assert!(
            serde_json::from_value::<Term>(json!({"termType": "NamedNode", "value": 5})).is_err()
        );

        let mut quad = sample_quad().to_json();
        quad["object"]["value"] = Value::Null;
        assert_eq!(
            Quad::from_json(&quad),
            Err(TermError::InvalidValue(TermType::Literal))
        );

        let mut quad = sample_quad().to_json();
        quad["object"]["datatype"]["value"] = json!(1);
        assert_eq!(
            Quad::from_json(&quad),
            Err(TermError::InvalidValue(TermType::NamedNode))
        );

        // the default graph carries no meaningful value
        let graph = Term::from_json(&json!({"termType": "DefaultGraph"})).unwrap();
        assert!(graph.is_default_graph());
    }

    #[test]
    fn json_cloning_shares_one_factory() {
        assert!(std::ptr::eq(json_factory(), json_factory()));
        for label in ["b0", "b1", "b2"] {
            let term = Term::from_json(&json!({"termType": "BlankNode", "value": label})).unwrap();
            assert_eq!(term.value(), label);
        }
        assert_eq!(json_factory().blank_node_counter(), 0);
        assert_eq!(json_factory().blank_node_prefix(), "");
    }

    #[test]
    fn unknown_term_types_are_rejected() {
        let value = json!({"termType": "Triple", "value": ""});
        assert_eq!(
            Term::from_json(&value),
            Err(TermError::UnknownTermType("Triple".to_string()))
        );
        assert!(serde_json::from_value::<Term>(value).is_err());

        let incomplete = json!({
            "termType": "Quad",
            "subject": {"termType": "NamedNode", "value": "http://example.org/s"},
        });
        assert_eq!(
            Quad::from_json(&incomplete),
            Err(TermError::MissingQuadComponent(QuadPosition::Predicate))
        );
    }
}
