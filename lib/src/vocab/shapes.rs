vocabulary!(
    /// [SHACL](https://www.w3.org/TR/shacl/) vocabulary.
    shacl,
    "sh",
    "http://www.w3.org/ns/shacl#",
    [
        // classes
        AbstractResult,
        BlankNode,
        BlankNodeOrIRI,
        BlankNodeOrLiteral,
        IRI,
        IRIOrLiteral,
        Info,
        Literal,
        NodeKind,
        NodeShape,
        PrefixDeclaration,
        PropertyGroup,
        PropertyShape,
        Severity,
        Shape,
        ValidationReport,
        ValidationResult,
        Violation,
        Warning,
        // properties
        alternativePath,
        and,
        class,
        closed,
        conforms,
        datatype,
        deactivated,
        declare,
        description,
        disjoint,
        equals,
        flags,
        focusNode,
        group,
        hasValue,
        ignoredProperties,
        inversePath,
        languageIn,
        lessThan,
        lessThanOrEquals,
        maxCount,
        maxExclusive,
        maxInclusive,
        maxLength,
        message,
        minCount,
        minExclusive,
        minInclusive,
        minLength,
        name,
        namespace,
        node,
        nodeKind,
        not,
        oneOrMorePath,
        or,
        order,
        path,
        pattern,
        prefix,
        prefixes,
        property,
        qualifiedMaxCount,
        qualifiedMinCount,
        qualifiedValueShape,
        result,
        resultMessage,
        resultPath,
        resultSeverity,
        severity,
        sourceConstraintComponent,
        sourceShape,
        targetClass,
        targetNode,
        targetObjectsOf,
        targetSubjectsOf,
        uniqueLang,
        value,
        xone,
        zeroOrMorePath,
        zeroOrOnePath,
    ],
    renamed [
        in_ => "in",
    ]
);

vocabulary!(
    /// [ShEx](https://shex.io/shex-semantics/) vocabulary.
    shex,
    "shex",
    "http://www.w3.org/ns/shex#",
    [
        Annotation,
        EachOf,
        IriStem,
        IriStemRange,
        Language,
        LanguageStem,
        LanguageStemRange,
        LiteralStem,
        LiteralStemRange,
        NodeConstraint,
        OneOf,
        Schema,
        SemAct,
        Shape,
        ShapeAnd,
        ShapeDecl,
        ShapeExternal,
        ShapeNot,
        ShapeOr,
        Start,
        TripleConstraint,
        Wildcard,
        annotation,
        bnode,
        closed,
        code,
        datatype,
        exclusion,
        expression,
        expressions,
        extra,
        flags,
        fractiondigits,
        inverse,
        iri,
        languageTag,
        length,
        literal,
        max,
        maxexclusive,
        maxinclusive,
        maxlength,
        min,
        minexclusive,
        mininclusive,
        minlength,
        name,
        nodeKind,
        nonliteral,
        object,
        pattern,
        predicate,
        semActs,
        shapeExpr,
        shapeExprs,
        shapes,
        start,
        stem,
        totaldigits,
        valueExpr,
        values,
    ],
    renamed [
        abstract_ => "abstract",
        extends_ => "extends",
    ]
);
