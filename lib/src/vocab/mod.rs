//! Constant vocabulary tables.
//!
//! Each vocabulary is a module holding one `const` [`NamedNode`] per term,
//! named after the local name (`foaf::Person`, `rdfs::label`). Local names
//! that are Rust keywords or not valid identifiers are spelled with an
//! underscore, e.g. `rdf::type_` or `vcard::given_name`. Every module also
//! carries `PREFIX`, `NAMESPACE`, `PREFIX_AND_NAMESPACE`, an `ns` helper for
//! ad-hoc local names, and a `TERMS` listing of `(local name, IRI)` pairs.
//!
//! ```
//! use rdfjs_terms::vocab::{foaf, rdf};
//!
//! assert_eq!(rdf::type_.value(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! assert_eq!(foaf::ns("name"), foaf::name);
//! ```
//!
//! [`NamedNode`]: crate::term::NamedNode

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $module:ident, $prefix:literal, $namespace:literal,
        [ $($name:ident),* $(,)? ]
        $(, renamed [ $($alias:ident => $local:literal),* $(,)? ])?
    ) => {
        $(#[$meta])*
        #[allow(non_upper_case_globals)]
        pub mod $module {
            pub const PREFIX: &str = $prefix;
            pub const NAMESPACE: &str = $namespace;
            pub const PREFIX_AND_NAMESPACE: (&str, &str) = ($prefix, $namespace);

            /// Builds a named node for `local_name` in this namespace.
            pub fn ns(local_name: &str) -> $crate::term::NamedNode {
                $crate::term::NamedNode::new(format!("{}{}", NAMESPACE, local_name))
            }

            $(
                pub const $name: $crate::term::NamedNode =
                    $crate::term::NamedNode::new_static(concat!($namespace, stringify!($name)));
            )*
            $($(
                pub const $alias: $crate::term::NamedNode =
                    $crate::term::NamedNode::new_static(concat!($namespace, $local));
            )*)?

            pub const TERMS: &[(&str, &str)] = &[
                $( (stringify!($name), concat!($namespace, stringify!($name))), )*
                $($( ($local, concat!($namespace, $local)), )*)?
            ];
        }
    };
}

mod metadata;
pub mod registry;
mod shapes;
mod w3c_core;

pub use metadata::{dcat, dcterms, foaf, ldp, odrl, prov, schema, skos, vcard};
pub use shapes::{shacl, shex};
pub use w3c_core::{owl, rdf, rdfs, xsd};

/// `(prefix, namespace)` for every table in this module.
pub const ALL_VOCABULARIES: &[(&str, &str)] = &[
    rdf::PREFIX_AND_NAMESPACE,
    rdfs::PREFIX_AND_NAMESPACE,
    xsd::PREFIX_AND_NAMESPACE,
    owl::PREFIX_AND_NAMESPACE,
    foaf::PREFIX_AND_NAMESPACE,
    dcterms::PREFIX_AND_NAMESPACE,
    dcat::PREFIX_AND_NAMESPACE,
    odrl::PREFIX_AND_NAMESPACE,
    prov::PREFIX_AND_NAMESPACE,
    skos::PREFIX_AND_NAMESPACE,
    vcard::PREFIX_AND_NAMESPACE,
    ldp::PREFIX_AND_NAMESPACE,
    schema::PREFIX_AND_NAMESPACE,
    shacl::PREFIX_AND_NAMESPACE,
    shex::PREFIX_AND_NAMESPACE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_constants() {
        assert_eq!(
            rdf::type_.value(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
        assert_eq!(rdf::langString, crate::consts::RDF_LANG_STRING);
        assert_eq!(xsd::string, crate::consts::XSD_STRING);
        assert_eq!(dcterms::abstract_.value(), "http://purl.org/dc/terms/abstract");
        assert_eq!(
            vcard::given_name.value(),
            "http://www.w3.org/2006/vcard/ns#given-name"
        );
    }

    #[test]
    fn ns_reproduces_every_listed_term() {
        let tables: &[(&[(&str, &str)], fn(&str) -> crate::term::NamedNode)] = &[
            (rdf::TERMS, rdf::ns),
            (rdfs::TERMS, rdfs::ns),
            (xsd::TERMS, xsd::ns),
            (owl::TERMS, owl::ns),
            (foaf::TERMS, foaf::ns),
            (dcterms::TERMS, dcterms::ns),
            (dcat::TERMS, dcat::ns),
            (odrl::TERMS, odrl::ns),
            (prov::TERMS, prov::ns),
            (skos::TERMS, skos::ns),
            (vcard::TERMS, vcard::ns),
            (ldp::TERMS, ldp::ns),
            (schema::TERMS, schema::ns),
            (shacl::TERMS, shacl::ns),
            (shex::TERMS, shex::ns),
        ];
        assert_eq!(tables.len(), ALL_VOCABULARIES.len());
        for (terms, ns) in tables {
            assert!(!terms.is_empty());
            for (local, iri) in terms.iter() {
                assert_eq!(ns(local).value(), *iri);
            }
        }
    }

    #[test]
    fn local_names_are_unique_per_table() {
        let tables = [
            rdf::TERMS,
            rdfs::TERMS,
            xsd::TERMS,
            owl::TERMS,
            foaf::TERMS,
            dcterms::TERMS,
            dcat::TERMS,
            odrl::TERMS,
            prov::TERMS,
            skos::TERMS,
            vcard::TERMS,
            ldp::TERMS,
            schema::TERMS,
            shacl::TERMS,
            shex::TERMS,
        ];
        for terms in tables {
            let mut names: Vec<&str> = terms.iter().map(|(local, _)| *local).collect();
            let n = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), n);
        }
    }
}
