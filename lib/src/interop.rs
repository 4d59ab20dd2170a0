//! Bridges between this crate's terms and the oxigraph model.
//!
//! Oxigraph terms implement [`RdfTerm`], so `DataFactory::from_term` and
//! `from_quad` clone them directly. Going the other way validates IRIs,
//! blank node labels and language tags, which this crate never does.

use crate::consts::XSD_STRING;
use crate::term::{Literal, Quad, QuadPosition, RdfTerm, Term, TermType};
use anyhow::{anyhow, Result};
use log::debug;
use oxigraph::model as ox;

// RDF 1.2 triple terms have no counterpart here; reporting them under their
// own name makes `from_term` reject them as an unknown term type.
const TRIPLE_TAG: &str = "Triple";

impl RdfTerm for ox::NamedNode {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::NamedNode.as_str())
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl RdfTerm for ox::BlankNode {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::BlankNode.as_str())
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl RdfTerm for ox::Literal {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::Literal.as_str())
    }

    fn value(&self) -> &str {
        ox::Literal::value(self)
    }

    fn language(&self) -> &str {
        ox::Literal::language(self).unwrap_or("")
    }

    fn datatype(&self) -> Option<&str> {
        Some(ox::Literal::datatype(self).as_str())
    }
}

impl RdfTerm for ox::NamedOrBlankNode {
    fn term_type_tag(&self) -> Option<&str> {
        match self {
            ox::NamedOrBlankNode::NamedNode(node) => node.term_type_tag(),
            ox::NamedOrBlankNode::BlankNode(node) => node.term_type_tag(),
        }
    }

    fn value(&self) -> &str {
        match self {
            ox::NamedOrBlankNode::NamedNode(node) => node.as_str(),
            ox::NamedOrBlankNode::BlankNode(node) => node.as_str(),
        }
    }
}

impl RdfTerm for ox::GraphName {
    fn term_type_tag(&self) -> Option<&str> {
        Some(match self {
            ox::GraphName::NamedNode(_) => TermType::NamedNode.as_str(),
            ox::GraphName::BlankNode(_) => TermType::BlankNode.as_str(),
            ox::GraphName::DefaultGraph => TermType::DefaultGraph.as_str(),
        })
    }

    fn value(&self) -> &str {
        match self {
            ox::GraphName::NamedNode(node) => node.as_str(),
            ox::GraphName::BlankNode(node) => node.as_str(),
            ox::GraphName::DefaultGraph => "",
        }
    }
}

impl RdfTerm for ox::Term {
    #[allow(unreachable_patterns)]
    fn term_type_tag(&self) -> Option<&str> {
        match self {
            ox::Term::NamedNode(node) => node.term_type_tag(),
            ox::Term::BlankNode(node) => node.term_type_tag(),
            ox::Term::Literal(literal) => literal.term_type_tag(),
            _ => Some(TRIPLE_TAG),
        }
    }

    #[allow(unreachable_patterns)]
    fn value(&self) -> &str {
        match self {
            ox::Term::NamedNode(node) => node.as_str(),
            ox::Term::BlankNode(node) => node.as_str(),
            ox::Term::Literal(literal) => literal.value(),
            _ => "",
        }
    }

    fn language(&self) -> &str {
        match self {
            ox::Term::Literal(literal) => RdfTerm::language(literal),
            _ => "",
        }
    }

    fn datatype(&self) -> Option<&str> {
        match self {
            ox::Term::Literal(literal) => RdfTerm::datatype(literal),
            _ => None,
        }
    }
}

impl RdfTerm for ox::Quad {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::Quad.as_str())
    }

    fn value(&self) -> &str {
        ""
    }

    fn quad_component(&self, position: QuadPosition) -> Option<&dyn RdfTerm> {
        let component: &dyn RdfTerm = match position {
            QuadPosition::Subject => &self.subject,
            QuadPosition::Predicate => &self.predicate,
            QuadPosition::Object => &self.object,
            QuadPosition::Graph => &self.graph_name,
        };
        Some(component)
    }
}

fn to_oxigraph_named_node(term: &Term) -> Result<ox::NamedNode> {
    match term {
        Term::NamedNode(node) => Ok(ox::NamedNode::new(node.as_str())?),
        other => Err(anyhow!(
            "Expected a NamedNode but found {}",
            other.term_type()
        )),
    }
}

fn to_oxigraph_literal(literal: &Literal) -> Result<ox::Literal> {
    if literal.is_language_tagged() {
        Ok(ox::Literal::new_language_tagged_literal(
            literal.value(),
            literal.language(),
        )?)
    } else if literal.datatype() == &XSD_STRING {
        Ok(ox::Literal::new_simple_literal(literal.value()))
    } else {
        let datatype = ox::NamedNode::new(literal.datatype().as_str())?;
        Ok(ox::Literal::new_typed_literal(literal.value(), datatype))
    }
}

/// Converts a named node, blank node or literal into an oxigraph term.
pub fn to_oxigraph_term(term: &Term) -> Result<ox::Term> {
    match term {
        Term::NamedNode(node) => Ok(ox::NamedNode::new(node.as_str())?.into()),
        Term::BlankNode(node) => Ok(ox::BlankNode::new(node.as_str())?.into()),
        Term::Literal(literal) => Ok(to_oxigraph_literal(literal)?.into()),
        other => Err(anyhow!(
            "{} terms have no oxigraph counterpart: {}",
            other.term_type(),
            other
        )),
    }
}

pub fn to_oxigraph_graph_name(term: &Term) -> Result<ox::GraphName> {
    match term {
        Term::NamedNode(node) => Ok(ox::NamedNode::new(node.as_str())?.into()),
        Term::BlankNode(node) => Ok(ox::BlankNode::new(node.as_str())?.into()),
        Term::DefaultGraph(_) => Ok(ox::GraphName::DefaultGraph),
        other => Err(anyhow!("{} cannot name a graph", other.term_type())),
    }
}

pub fn to_oxigraph_quad(quad: &Quad) -> Result<ox::Quad> {
    let subject: ox::NamedOrBlankNode = match quad.subject() {
        Term::NamedNode(node) => ox::NamedNode::new(node.as_str())?.into(),
        Term::BlankNode(node) => ox::BlankNode::new(node.as_str())?.into(),
        other => {
            return Err(anyhow!(
                "{} cannot be the subject of an oxigraph quad",
                other.term_type()
            ))
        }
    };
    Ok(ox::Quad::new(
        subject,
        to_oxigraph_named_node(quad.predicate())?,
        to_oxigraph_term(quad.object())?,
        to_oxigraph_graph_name(quad.graph())?,
    ))
}

/// Collects quads into an oxigraph dataset, failing on the first quad that
/// oxigraph cannot represent.
pub fn to_oxigraph_dataset<'a>(quads: impl IntoIterator<Item = &'a Quad>) -> Result<ox::Dataset> {
    let mut dataset = ox::Dataset::new();
    for quad in quads {
        let converted = to_oxigraph_quad(quad).map_err(|e| {
            debug!("Cannot convert {} to oxigraph: {}", quad, e);
            e
        })?;
        dataset.insert(&converted);
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{DataFactory, PrefixSequence};

    #[test]
    fn oxigraph_terms_clone_into_native_terms() {
        let df = DataFactory::with_sequence(&PrefixSequence::new());
        let literal = ox::Literal::new_typed_literal(
            "3",
            ox::NamedNode::new("http://www.w3.org/2001/XMLSchema#integer").unwrap(),
        );
        let cloned = df.from_term(&literal).unwrap();
        assert!(cloned.equals(Some(&literal)));
        assert_eq!(
            cloned.as_literal().unwrap().datatype().value(),
            "http://www.w3.org/2001/XMLSchema#integer"
        );

        let tagged = ox::Literal::new_language_tagged_literal("bonjour", "fr").unwrap();
        let cloned = df.from_term(&tagged).unwrap();
        assert_eq!(cloned.as_literal().unwrap().language(), "fr");

        let plain = ox::Literal::new_simple_literal("x");
        assert!(df.from_term(&plain).unwrap().as_literal().unwrap().is_plain());
    }

    #[test]
    fn variables_do_not_convert() {
        let df = DataFactory::with_sequence(&PrefixSequence::new());
        let var: Term = df.variable("x").into();
        assert!(to_oxigraph_term(&var).is_err());
    }

    #[test]
    fn invalid_iris_are_reported() {
        let df = DataFactory::with_sequence(&PrefixSequence::new());
        let bad: Term = df.named_node("not an iri").into();
        assert!(to_oxigraph_term(&bad).is_err());
    }
}
