//! The `DataFactory`: single point of construction for every term kind, and
//! the deep-cloner that turns terms from any [`RdfTerm`] implementation into
//! this crate's types.

use crate::config::DataFactoryOptions;
use crate::consts::{BLANK_NODE_PREFIX_STEM, XSD_STRING};
use crate::errors::TermError;
use crate::term::{
    BlankNode, DefaultGraph, Literal, NamedNode, Quad, QuadPosition, RdfTerm, Term, TermType,
    Variable,
};
use log::{debug, trace};
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out the `df_<N>_` prefixes for factories built without an explicit
/// prefix. N increases by one for every prefix handed out.
#[derive(Debug, Default)]
pub struct PrefixSequence {
    next: AtomicU64,
}

static GLOBAL_PREFIX_SEQUENCE: PrefixSequence = PrefixSequence::new();

impl PrefixSequence {
    pub const fn new() -> Self {
        PrefixSequence {
            next: AtomicU64::new(0),
        }
    }

    /// The sequence shared by every factory created with [`DataFactory::new`].
    pub fn global() -> &'static PrefixSequence {
        &GLOBAL_PREFIX_SEQUENCE
    }

    pub fn next_prefix(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}_", BLANK_NODE_PREFIX_STEM, n)
    }
}

/// The second argument of [`DataFactory::literal_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageOrDatatype {
    None,
    Language(String),
    Datatype(NamedNode),
}

impl From<&str> for LanguageOrDatatype {
    fn from(language: &str) -> Self {
        LanguageOrDatatype::from(language.to_string())
    }
}

/// An empty tag means no language.
impl From<String> for LanguageOrDatatype {
    fn from(language: String) -> Self {
        if language.is_empty() {
            LanguageOrDatatype::None
        } else {
            LanguageOrDatatype::Language(language)
        }
    }
}

impl From<NamedNode> for LanguageOrDatatype {
    fn from(datatype: NamedNode) -> Self {
        LanguageOrDatatype::Datatype(datatype)
    }
}

impl From<&NamedNode> for LanguageOrDatatype {
    fn from(datatype: &NamedNode) -> Self {
        LanguageOrDatatype::Datatype(datatype.clone())
    }
}

impl<T: Into<LanguageOrDatatype>> From<Option<T>> for LanguageOrDatatype {
    fn from(value: Option<T>) -> Self {
        value.map_or(LanguageOrDatatype::None, Into::into)
    }
}

#[derive(Debug)]
pub struct DataFactory {
    blank_node_prefix: String,
    blank_node_counter: u64,
}

impl Default for DataFactory {
    fn default() -> Self {
        DataFactory::new()
    }
}

impl DataFactory {
    /// Creates a factory whose blank node prefix comes from the global
    /// [`PrefixSequence`].
    pub fn new() -> Self {
        Self::with_sequence(PrefixSequence::global())
    }

    pub fn with_sequence(sequence: &PrefixSequence) -> Self {
        Self::with_options(DataFactoryOptions::default(), sequence)
    }

    /// The sequence is only consulted when `options` carries no prefix.
    pub fn with_options(options: DataFactoryOptions, sequence: &PrefixSequence) -> Self {
        let blank_node_prefix = options
            .blank_node_prefix
            .unwrap_or_else(|| sequence.next_prefix());
        debug!(
            "Created data factory with blank node prefix {:?}",
            blank_node_prefix
        );
        DataFactory {
            blank_node_prefix,
            blank_node_counter: 0,
        }
    }

    pub fn blank_node_prefix(&self) -> &str {
        &self.blank_node_prefix
    }

    pub fn blank_node_counter(&self) -> u64 {
        self.blank_node_counter
    }

    pub fn named_node(&self, iri: impl Into<String>) -> NamedNode {
        NamedNode::new(iri)
    }

    /// Returns a blank node labelled `id`, or when `id` is `None` or empty a
    /// fresh `<prefix><counter>` label, advancing the counter.
    pub fn blank_node(&mut self, id: Option<&str>) -> BlankNode {
        match id {
            Some(id) if !id.is_empty() => BlankNode::new(id),
            _ => {
                let label = format!("{}{}", self.blank_node_prefix, self.blank_node_counter);
                self.blank_node_counter += 1;
                trace!("Generated blank node {}", label);
                BlankNode::new(label)
            }
        }
    }

    /// A plain literal with datatype `xsd:string`.
    pub fn literal(&self, value: impl Into<String>) -> Literal {
        Literal::new_simple(value)
    }

    /// A string argument is a language tag; a `NamedNode` is the datatype.
    pub fn literal_with(
        &self,
        value: impl Into<String>,
        language_or_datatype: impl Into<LanguageOrDatatype>,
    ) -> Literal {
        match language_or_datatype.into() {
            LanguageOrDatatype::None => Literal::new_simple(value),
            LanguageOrDatatype::Language(language) => Literal::new_language_tagged(value, language),
            LanguageOrDatatype::Datatype(datatype) => Literal::new_typed(value, datatype),
        }
    }

    pub fn variable(&self, name: impl Into<String>) -> Variable {
        Variable::new(name)
    }

    pub fn default_graph(&self) -> &'static DefaultGraph {
        DefaultGraph::instance()
    }

    /// Builds a quad; a missing graph means the default graph.
    pub fn quad(
        &self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: Option<Term>,
    ) -> Quad {
        let graph = graph.unwrap_or_else(|| Term::DefaultGraph(self.default_graph()));
        Quad::new(subject, predicate, object, graph)
    }

    /// Deep-clones `term`, which may come from any [`RdfTerm`] implementation.
    ///
    /// Blank node labels are copied verbatim and do not touch the counter.
    pub fn from_term<T: RdfTerm + ?Sized>(&self, term: &T) -> Result<Term, TermError> {
        let tag = term.term_type_tag().ok_or_else(|| {
            debug!("Refusing to clone a term without a term type");
            TermError::MissingTermType
        })?;
        let term_type = tag.parse::<TermType>().map_err(|e| {
            debug!("Refusing to clone a term of type {}", tag);
            e
        })?;
        Ok(match term_type {
            TermType::NamedNode => self.named_node(term.value()).into(),
            TermType::BlankNode => BlankNode::new(term.value()).into(),
            TermType::Literal => self.literal_from(term).into(),
            TermType::Variable => self.variable(term.value()).into(),
            TermType::DefaultGraph => self.default_graph().into(),
            TermType::Quad => self.quad_from(term)?.into(),
        })
    }

    /// Like [`DataFactory::from_term`] but for quads. A value with no term
    /// type at all is accepted as a legacy quad.
    pub fn from_quad<T: RdfTerm + ?Sized>(&self, quad: &T) -> Result<Quad, TermError> {
        match quad.term_type_tag() {
            None => self.quad_from(quad),
            Some(tag) if tag == TermType::Quad.as_str() => self.quad_from(quad),
            Some(tag) => Err(TermError::NotAQuad(tag.to_string())),
        }
    }

    pub fn reset_blank_node_counter(&mut self) {
        debug!(
            "Resetting blank node counter of factory {} at {}",
            self.blank_node_prefix, self.blank_node_counter
        );
        self.blank_node_counter = 0;
    }

    fn literal_from<T: RdfTerm + ?Sized>(&self, term: &T) -> Literal {
        let language = term.language();
        if !language.is_empty() {
            return self.literal_with(term.value(), language);
        }
        match term.datatype() {
            Some(datatype) if datatype != XSD_STRING.as_str() => {
                self.literal_with(term.value(), self.named_node(datatype))
            }
            _ => self.literal(term.value()),
        }
    }

    fn quad_from<T: RdfTerm + ?Sized>(&self, quad: &T) -> Result<Quad, TermError> {
        let component = |position: QuadPosition| -> Result<Term, TermError> {
            let part = quad
                .quad_component(position)
                .ok_or(TermError::MissingQuadComponent(position))?;
            self.from_term(part)
        };
        Ok(Quad::new(
            component(QuadPosition::Subject)?,
            component(QuadPosition::Predicate)?,
            component(QuadPosition::Object)?,
            component(QuadPosition::Graph)?,
        ))
    }
}
