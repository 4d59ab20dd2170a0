//! rdfjs-terms: the RDF/JS data model in Rust.
//!
//! The crate provides the five RDF/JS term kinds plus `Quad`, a
//! [`DataFactory`] that builds them and deep-clones terms coming from any
//! other implementation, and constant vocabulary tables under [`vocab`].
//!
//! ```
//! use rdfjs_terms::vocab::{foaf, rdf};
//! use rdfjs_terms::{DataFactory, PrefixSequence, RdfTerm};
//!
//! let mut df = DataFactory::with_sequence(&PrefixSequence::new());
//! let alice = df.blank_node(None);
//! assert_eq!(alice.value(), "df_0_0");
//!
//! let typed = df.quad(alice.clone(), rdf::type_, foaf::Person, None);
//! let named = df.quad(alice, foaf::name, df.literal_with("Alice", "en"), None);
//! assert!(typed.graph().equals(Some(named.graph())));
//!
//! // terms from another implementation clone into this one
//! let copy = DataFactory::new().from_quad(&named.to_json()).unwrap();
//! assert!(copy.equals(Some(&named)));
//! ```

pub mod config;
pub mod consts;
pub mod errors;
pub mod factory;
pub mod interop;
pub mod json;
pub mod term;
pub mod vocab;

pub use config::DataFactoryOptions;
pub use errors::TermError;
pub use factory::{DataFactory, LanguageOrDatatype, PrefixSequence};
pub use interop::{to_oxigraph_dataset, to_oxigraph_graph_name, to_oxigraph_quad, to_oxigraph_term};
pub use term::{
    BlankNode, DefaultGraph, Literal, NamedNode, Quad, QuadPosition, RdfTerm, Term, TermType,
    Variable,
};
