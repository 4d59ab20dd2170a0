//! Defines the RDF term model: `NamedNode`, `BlankNode`, `Literal`, `Variable`,
//! `DefaultGraph` and `Quad`, the closed `Term` union over them, and the
//! structural [`RdfTerm`] interface through which terms from any other
//! implementation can be compared and cloned.

use crate::consts::{RDF_LANG_STRING, XSD_STRING};
use crate::errors::TermError;
use std::borrow::Cow;
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

/// The kind of a term. `as_str` yields the RDF/JS `termType` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermType {
    NamedNode,
    BlankNode,
    Literal,
    Variable,
    DefaultGraph,
    Quad,
}

impl TermType {
    pub const ALL: [TermType; 6] = [
        TermType::NamedNode,
        TermType::BlankNode,
        TermType::Literal,
        TermType::Variable,
        TermType::DefaultGraph,
        TermType::Quad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TermType::NamedNode => "NamedNode",
            TermType::BlankNode => "BlankNode",
            TermType::Literal => "Literal",
            TermType::Variable => "Variable",
            TermType::DefaultGraph => "DefaultGraph",
            TermType::Quad => "Quad",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermType {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TermType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TermError::UnknownTermType(s.to_string()))
    }
}

/// One of the four slots of a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadPosition {
    Subject,
    Predicate,
    Object,
    Graph,
}

impl QuadPosition {
    pub const ALL: [QuadPosition; 4] = [
        QuadPosition::Subject,
        QuadPosition::Predicate,
        QuadPosition::Object,
        QuadPosition::Graph,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuadPosition::Subject => "subject",
            QuadPosition::Predicate => "predicate",
            QuadPosition::Object => "object",
            QuadPosition::Graph => "graph",
        }
    }
}

impl fmt::Display for QuadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural RDF/JS `Term` interface.
///
/// Anything that can describe itself through these accessors can be compared
/// with [`RdfTerm::equals`] and deep-cloned into this crate's types with
/// [`crate::DataFactory::from_term`]. Implementations exist for the types in
/// this module, for `serde_json::Value` and for the oxigraph model.
pub trait RdfTerm {
    /// The `termType` discriminator. `None` marks a legacy quad-shaped value
    /// that predates the discriminator; such values are only ever treated as
    /// quads.
    fn term_type_tag(&self) -> Option<&str>;

    fn value(&self) -> &str;

    /// Language tag of a literal, `""` otherwise.
    fn language(&self) -> &str {
        ""
    }

    /// Datatype IRI of a literal.
    fn datatype(&self) -> Option<&str> {
        None
    }

    /// Component of a quad.
    fn quad_component(&self, _position: QuadPosition) -> Option<&dyn RdfTerm> {
        None
    }

    /// Structural equality across implementations.
    ///
    /// Compares the discriminator first, then the value. Literals also
    /// compare language and datatype; quads compare their four components
    /// recursively. Returns false when `other` is `None`.
    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        let other = match other {
            Some(other) => other,
            None => return false,
        };
        let tag = self.term_type_tag();
        let is_quad_tag = |t: Option<&str>| t.map_or(true, |t| t == TermType::Quad.as_str());

        if is_quad_tag(tag) {
            if !is_quad_tag(other.term_type_tag()) {
                return false;
            }
            return QuadPosition::ALL
                .iter()
                .all(|&position| match self.quad_component(position) {
                    Some(component) => component.equals(other.quad_component(position)),
                    None => false,
                });
        }

        if tag != other.term_type_tag() || self.value() != other.value() {
            return false;
        }
        if tag == Some(TermType::Literal.as_str()) {
            return self.language() == other.language() && self.datatype() == other.datatype();
        }
        true
    }
}

/// An IRI reference.
///
/// The IRI is never validated. Vocabulary tables build their constants
/// with [`NamedNode::new_static`], so they live in `const` items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode {
    iri: Cow<'static, str>,
}

impl NamedNode {
    pub fn new(iri: impl Into<String>) -> Self {
        NamedNode {
            iri: Cow::Owned(iri.into()),
        }
    }

    pub const fn new_static(iri: &'static str) -> Self {
        NamedNode {
            iri: Cow::Borrowed(iri),
        }
    }

    pub fn value(&self) -> &str {
        &self.iri
    }

    pub fn as_str(&self) -> &str {
        &self.iri
    }

    pub fn into_string(self) -> String {
        self.iri.into_owned()
    }

    pub fn term_type(&self) -> TermType {
        TermType::NamedNode
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

/// A blank node with a locally scoped label.
///
/// Labels are not checked for uniqueness; that is up to whoever creates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode {
    id: String,
}

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Self {
        BlankNode { id: id.into() }
    }

    pub fn value(&self) -> &str {
        &self.id
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn term_type(&self) -> TermType {
        TermType::BlankNode
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}

/// A literal: lexical form, language tag (`""` when absent) and datatype.
///
/// The datatype is always present. It is `rdf:langString` for
/// language-tagged literals and `xsd:string` for plain ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    value: String,
    language: String,
    datatype: NamedNode,
}

impl Literal {
    pub fn new_simple(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: String::new(),
            datatype: XSD_STRING,
        }
    }

    pub fn new_language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: language.into(),
            datatype: RDF_LANG_STRING,
        }
    }

    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            language: String::new(),
            datatype,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    pub fn is_language_tagged(&self) -> bool {
        !self.language.is_empty()
    }

    /// True for a plain `xsd:string` literal without a language tag.
    pub fn is_plain(&self) -> bool {
        self.language.is_empty() && self.datatype == XSD_STRING
    }

    pub fn term_type(&self) -> TermType {
        TermType::Literal
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_quoted_str(&self.value, f)?;
        if self.is_language_tagged() {
            write!(f, "@{}", self.language)
        } else if self.datatype != XSD_STRING {
            write!(f, "^^{}", self.datatype)
        } else {
            Ok(())
        }
    }
}

fn fmt_quoted_str(string: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for c in string.chars() {
        match c {
            '\n' => f.write_str("\\n"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            c => f.write_char(c),
        }?;
    }
    f.write_char('"')
}

/// A query variable, as used in SPARQL patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn term_type(&self) -> TermType {
        TermType::Variable
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// The default graph marker.
///
/// Only one instance exists; get it with [`DefaultGraph::instance`].
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefaultGraph {
    _private: (),
}

static DEFAULT_GRAPH: DefaultGraph = DefaultGraph { _private: () };

impl DefaultGraph {
    pub fn instance() -> &'static DefaultGraph {
        &DEFAULT_GRAPH
    }

    pub fn value(&self) -> &str {
        ""
    }

    pub fn term_type(&self) -> TermType {
        TermType::DefaultGraph
    }
}

impl fmt::Display for DefaultGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DEFAULT")
    }
}

/// Any RDF/JS term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    Variable(Variable),
    DefaultGraph(&'static DefaultGraph),
    Quad(Box<Quad>),
}

impl Term {
    pub fn term_type(&self) -> TermType {
        match self {
            Term::NamedNode(_) => TermType::NamedNode,
            Term::BlankNode(_) => TermType::BlankNode,
            Term::Literal(_) => TermType::Literal,
            Term::Variable(_) => TermType::Variable,
            Term::DefaultGraph(_) => TermType::DefaultGraph,
            Term::Quad(_) => TermType::Quad,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(node) => node.value(),
            Term::BlankNode(node) => node.value(),
            Term::Literal(literal) => literal.value(),
            Term::Variable(variable) => variable.value(),
            Term::DefaultGraph(graph) => graph.value(),
            Term::Quad(quad) => quad.value(),
        }
    }

    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph(_))
    }

    pub fn is_quad(&self) -> bool {
        matches!(self, Term::Quad(_))
    }

    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Term::Quad(quad) => Some(quad),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(node) => fmt::Display::fmt(node, f),
            Term::BlankNode(node) => fmt::Display::fmt(node, f),
            Term::Literal(literal) => fmt::Display::fmt(literal, f),
            Term::Variable(variable) => fmt::Display::fmt(variable, f),
            Term::DefaultGraph(graph) => fmt::Display::fmt(graph, f),
            Term::Quad(quad) => fmt::Display::fmt(quad, f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl From<&'static DefaultGraph> for Term {
    fn from(graph: &'static DefaultGraph) -> Self {
        Term::DefaultGraph(graph)
    }
}

impl From<Quad> for Term {
    fn from(quad: Quad) -> Self {
        Term::Quad(Box::new(quad))
    }
}

impl From<Box<Quad>> for Term {
    fn from(quad: Box<Quad>) -> Self {
        Term::Quad(quad)
    }
}

/// A subject, predicate, object and graph.
///
/// Components are arbitrary terms, so a quad may itself appear inside another
/// quad. Its value is always `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: impl Into<Term>,
    ) -> Self {
        Quad {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.into(),
        }
    }

    pub fn in_default_graph(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Quad::new(subject, predicate, object, DefaultGraph::instance())
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    pub fn graph(&self) -> &Term {
        &self.graph
    }

    pub fn component(&self, position: QuadPosition) -> &Term {
        match position {
            QuadPosition::Subject => &self.subject,
            QuadPosition::Predicate => &self.predicate,
            QuadPosition::Object => &self.object,
            QuadPosition::Graph => &self.graph,
        }
    }

    pub fn into_parts(self) -> (Term, Term, Term, Term) {
        (self.subject, self.predicate, self.object, self.graph)
    }

    pub fn value(&self) -> &str {
        ""
    }

    pub fn term_type(&self) -> TermType {
        TermType::Quad
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<< {} {} {} {} >>",
            self.subject, self.predicate, self.object, self.graph
        )
    }
}

impl RdfTerm for NamedNode {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::NamedNode.as_str())
    }

    fn value(&self) -> &str {
        &self.iri
    }
}

impl RdfTerm for BlankNode {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::BlankNode.as_str())
    }

    fn value(&self) -> &str {
        &self.id
    }
}

impl RdfTerm for Literal {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::Literal.as_str())
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn datatype(&self) -> Option<&str> {
        Some(self.datatype.as_str())
    }
}

impl RdfTerm for Variable {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::Variable.as_str())
    }

    fn value(&self) -> &str {
        &self.name
    }
}

impl RdfTerm for DefaultGraph {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::DefaultGraph.as_str())
    }

    fn value(&self) -> &str {
        ""
    }
}

impl RdfTerm for Quad {
    fn term_type_tag(&self) -> Option<&str> {
        Some(TermType::Quad.as_str())
    }

    fn value(&self) -> &str {
        ""
    }

    fn quad_component(&self, position: QuadPosition) -> Option<&dyn RdfTerm> {
        let component: &dyn RdfTerm = self.component(position);
        Some(component)
    }
}

impl RdfTerm for Term {
    fn term_type_tag(&self) -> Option<&str> {
        Some(self.term_type().as_str())
    }

    fn value(&self) -> &str {
        Term::value(self)
    }

    fn language(&self) -> &str {
        match self {
            Term::Literal(literal) => literal.language(),
            _ => "",
        }
    }

    fn datatype(&self) -> Option<&str> {
        match self {
            Term::Literal(literal) => Some(literal.datatype().as_str()),
            _ => None,
        }
    }

    fn quad_component(&self, position: QuadPosition) -> Option<&dyn RdfTerm> {
        match self {
            Term::Quad(quad) => quad.quad_component(position),
            _ => None,
        }
    }
}
