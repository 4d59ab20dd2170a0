use rdfjs_terms::vocab::xsd;
use rdfjs_terms::{
    DataFactory, DataFactoryOptions, PrefixSequence, Quad, RdfTerm, Term, TermError,
};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fresh_factory() -> DataFactory {
    init_logging();
    DataFactory::with_sequence(&PrefixSequence::new())
}

#[test]
fn test_named_node_equality() {
    let df = fresh_factory();
    for v in ["", "http://example.org/a", "urn:x", "not an iri"] {
        assert!(df.named_node(v).equals(Some(&df.named_node(v))));
        assert!(!df
            .named_node(v)
            .equals(Some(&df.named_node(format!("{}x", v)))));
    }
}

#[test]
fn test_literal_defaults() {
    let df = fresh_factory();
    for v in ["", "hello", "42"] {
        let literal = df.literal(v);
        assert!(literal
            .datatype()
            .equals(Some(&df.named_node("http://www.w3.org/2001/XMLSchema#string"))));
        assert_eq!(literal.language(), "");
    }

    let tagged = df.literal_with("hello", "en");
    assert_eq!(tagged.language(), "en");
    assert!(tagged.datatype().equals(Some(
        &df.named_node("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString")
    )));
}

#[test]
fn test_blank_node_generation() {
    let mut df = fresh_factory();
    let first = df.blank_node(None);
    let second = df.blank_node(None);
    assert_eq!(first.value(), "df_0_0");
    assert_eq!(second.value(), "df_0_1");
    assert!(!first.equals(Some(&second)));

    df.reset_blank_node_counter();
    assert_eq!(df.blank_node(None), first);
}

#[test]
fn test_default_factories_get_distinct_prefixes() {
    init_logging();
    let a = DataFactory::new();
    let b = DataFactory::default();
    assert_ne!(a.blank_node_prefix(), b.blank_node_prefix());
    assert!(a.blank_node_prefix().starts_with("df_"));
    assert!(a.blank_node_prefix().ends_with('_'));
}

#[test]
fn test_options_prefix() {
    init_logging();
    let options = DataFactoryOptions::builder()
        .blank_node_prefix("run7_")
        .build()
        .unwrap();
    let mut df = DataFactory::with_options(options, &PrefixSequence::new());
    assert_eq!(df.blank_node(None).value(), "run7_0");
}

#[test]
fn test_quad_default_graph() {
    let df = fresh_factory();
    let quad = df.quad(
        df.named_node("http://example.org/s"),
        df.named_node("http://example.org/p"),
        df.literal("o"),
        None,
    );
    assert!(quad.graph().equals(Some(df.default_graph())));
    assert!(std::ptr::eq(df.default_graph(), df.default_graph()));
    match quad.graph() {
        Term::DefaultGraph(graph) => assert!(std::ptr::eq(*graph, df.default_graph())),
        other => panic!("expected the default graph, got {}", other),
    }
}

#[test]
fn test_cross_factory_round_trip() {
    let mut a = fresh_factory();
    let b = DataFactory::with_sequence(&PrefixSequence::new());

    let subject = a.blank_node(None);
    let inner = a.quad(
        subject,
        a.named_node("http://example.org/p"),
        a.literal_with("7", xsd::integer),
        Some(a.named_node("http://example.org/g").into()),
    );
    let terms: Vec<Term> = vec![
        a.named_node("http://example.org/s").into(),
        a.blank_node(Some("x")).into(),
        a.literal("plain").into(),
        a.literal_with("hallo", "de").into(),
        a.literal_with("7", xsd::integer).into(),
        a.variable("v").into(),
        a.default_graph().into(),
        inner.clone().into(),
        a.quad(inner, a.named_node("http://example.org/q"), a.variable("o"), None)
            .into(),
    ];
    for term in &terms {
        let cloned = b.from_term(term).unwrap();
        assert!(cloned.equals(Some(term)), "{} did not survive cloning", term);
        assert_eq!(&cloned, term);
    }
}

#[test]
fn test_from_term_keeps_integer_datatype() {
    let df = fresh_factory();
    let foreign = json!({
        "termType": "Literal",
        "value": "5",
        "language": "",
        "datatype": {"termType": "NamedNode", "value": "http://www.w3.org/2001/XMLSchema#integer"},
    });
    let cloned = df.from_term(&foreign).unwrap();
    assert_eq!(cloned.as_literal().unwrap().datatype(), &xsd::integer);
}

#[test]
fn test_from_term_errors() {
    let df = fresh_factory();
    assert_eq!(
        df.from_term(&json!({"termType": "Graph", "value": "g"})),
        Err(TermError::UnknownTermType("Graph".to_string()))
    );
    assert_eq!(
        df.from_term(&json!({"value": "g"})),
        Err(TermError::MissingTermType)
    );
    assert_eq!(
        df.from_quad(&json!({"termType": "Variable", "value": "v"})),
        Err(TermError::NotAQuad("Variable".to_string()))
    );
}

#[test]
fn test_legacy_quad_objects() {
    let df = fresh_factory();
    let quad: Quad = df.quad(
        df.named_node("http://example.org/s"),
        df.named_node("http://example.org/p"),
        df.named_node("http://example.org/o"),
        None,
    );
    let legacy = json!({
        "subject": {"termType": "NamedNode", "value": "http://example.org/s"},
        "predicate": {"termType": "NamedNode", "value": "http://example.org/p"},
        "object": {"termType": "NamedNode", "value": "http://example.org/o"},
        "graph": {"termType": "DefaultGraph", "value": ""},
    });
    assert!(quad.equals(Some(&legacy)));
    assert_eq!(df.from_quad(&legacy).unwrap(), quad);
}

#[test]
fn test_equals_none() {
    let df = fresh_factory();
    assert!(!df.named_node("a").equals(None));
    assert!(!df.literal("a").equals(None));
    assert!(!df.default_graph().equals(None));
}

#[test]
fn test_json_literals_without_datatype_round_trip() {
    let df = fresh_factory();
    for foreign in [
        json!({"termType": "Literal", "value": "a", "language": ""}),
        json!({"termType": "Literal", "value": "a", "language": "en"}),
    ] {
        let cloned = df.from_term(&foreign).unwrap();
        assert!(cloned.equals(Some(&foreign)));
    }
    assert_eq!(
        Term::from_json(&json!({"termType": "NamedNode", "value": 5})),
        Err(TermError::InvalidValue(rdfjs_terms::TermType::NamedNode))
    );
}
