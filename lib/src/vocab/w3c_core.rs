vocabulary!(
    /// [RDF 1.1](https://www.w3.org/TR/rdf11-concepts/) vocabulary.
    rdf,
    "rdf",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    [
        // classes
        Alt,
        Bag,
        CompoundLiteral,
        List,
        PlainLiteral,
        Property,
        Seq,
        Statement,
        // datatypes
        HTML,
        JSON,
        XMLLiteral,
        langString,
        // properties
        direction,
        first,
        language,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil,
    ],
    renamed [
        type_ => "type",
    ]
);

vocabulary!(
    /// [RDF Schema](https://www.w3.org/TR/rdf-schema/) vocabulary.
    rdfs,
    "rdfs",
    "http://www.w3.org/2000/01/rdf-schema#",
    [
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        comment,
        domain,
        isDefinedBy,
        label,
        member,
        range,
        seeAlso,
        subClassOf,
        subPropertyOf,
    ]
);

#[rustfmt::skip]
vocabulary!(
    /// XML Schema datatypes.
    xsd,
    "xsd",
    "http://www.w3.org/2001/XMLSchema#",
    [
        anyType,
        anySimpleType,
        anyAtomicType,
            duration,
                dayTimeDuration,
                yearMonthDuration,
            dateTime,
                dateTimeStamp,
            time,
            date,
            gYearMonth,
            gYear,
            gMonthDay,
            gDay,
            gMonth,
            boolean,
            base64Binary,
            hexBinary,
            float,
            double,
            anyURI,
            QName,
            NOTATION,
            string,
                normalizedString,
                    token,
                        language,
                        Name,
                            NCName,
                                ID,
                                IDREF,
                                    IDREFS,
                                ENTITY,
                                    ENTITIES,
                        NMTOKEN,
                        NMTOKENS,
            decimal,
                integer,
                    nonPositiveInteger,
                        negativeInteger,
                    long,
                        int,
                            short,
                                byte,
                    nonNegativeInteger,
                        unsignedLong,
                            unsignedInt,
                                unsignedShort,
                                    unsignedByte,
                        positiveInteger,
    ]
);

vocabulary!(
    /// [OWL 2](https://www.w3.org/TR/owl2-rdf-based-semantics/) vocabulary.
    owl,
    "owl",
    "http://www.w3.org/2002/07/owl#",
    [
        Nothing,
        Thing,
        // classes
        AllDifferent,
        AllDisjointClasses,
        AllDisjointProperties,
        Annotation,
        AnnotationProperty,
        AsymmetricProperty,
        Axiom,
        Class,
        DataRange,
        DatatypeProperty,
        DeprecatedClass,
        DeprecatedProperty,
        FunctionalProperty,
        InverseFunctionalProperty,
        IrreflexiveProperty,
        NamedIndividual,
        NegativePropertyAssertion,
        ObjectProperty,
        Ontology,
        OntologyProperty,
        ReflexiveProperty,
        Restriction,
        SymmetricProperty,
        TransitiveProperty,
        // properties
        allValuesFrom,
        annotatedProperty,
        annotatedSource,
        annotatedTarget,
        assertionProperty,
        backwardCompatibleWith,
        bottomDataProperty,
        bottomObjectProperty,
        cardinality,
        complementOf,
        datatypeComplementOf,
        deprecated,
        differentFrom,
        disjointUnionOf,
        disjointWith,
        distinctMembers,
        equivalentClass,
        equivalentProperty,
        hasKey,
        hasSelf,
        hasValue,
        imports,
        incompatibleWith,
        intersectionOf,
        inverseOf,
        maxCardinality,
        maxQualifiedCardinality,
        members,
        minCardinality,
        minQualifiedCardinality,
        onClass,
        onDataRange,
        onDatatype,
        onProperties,
        onProperty,
        oneOf,
        priorVersion,
        propertyChainAxiom,
        propertyDisjointWith,
        qualifiedCardinality,
        sameAs,
        someValuesFrom,
        sourceIndividual,
        targetIndividual,
        targetValue,
        topDataProperty,
        topObjectProperty,
        unionOf,
        versionIRI,
        versionInfo,
        withRestrictions,
    ]
);
