vocabulary!(
    /// [FOAF](http://xmlns.com/foaf/spec/) vocabulary.
    foaf,
    "foaf",
    "http://xmlns.com/foaf/0.1/",
    [
        Agent,
        Document,
        Group,
        Image,
        LabelProperty,
        OnlineAccount,
        OnlineChatAccount,
        OnlineEcommerceAccount,
        OnlineGamingAccount,
        Organization,
        Person,
        PersonalProfileDocument,
        Project,
        account,
        accountName,
        accountServiceHomepage,
        age,
        aimChatID,
        based_near,
        birthday,
        currentProject,
        depiction,
        depicts,
        dnaChecksum,
        familyName,
        family_name,
        firstName,
        fundedBy,
        geekcode,
        gender,
        givenName,
        givenname,
        holdsAccount,
        homepage,
        icqChatID,
        img,
        interest,
        isPrimaryTopicOf,
        jabberID,
        knows,
        lastName,
        logo,
        made,
        maker,
        mbox,
        mbox_sha1sum,
        member,
        membershipClass,
        msnChatID,
        myersBriggs,
        name,
        nick,
        openid,
        page,
        pastProject,
        phone,
        plan,
        primaryTopic,
        publications,
        schoolHomepage,
        sha1,
        skypeID,
        status,
        surname,
        theme,
        thumbnail,
        tipjar,
        title,
        topic,
        topic_interest,
        weblog,
        workInfoHomepage,
        workplaceHomepage,
        yahooChatID,
    ]
);

vocabulary!(
    /// [DCMI Metadata Terms](https://www.dublincore.org/specifications/dublin-core/dcmi-terms/).
    dcterms,
    "dcterms",
    "http://purl.org/dc/terms/",
    [
        Agent,
        AgentClass,
        BibliographicResource,
        Box,
        FileFormat,
        Frequency,
        ISO3166,
        Jurisdiction,
        LicenseDocument,
        LinguisticSystem,
        Location,
        LocationPeriodOrJurisdiction,
        MediaType,
        MediaTypeOrExtent,
        MethodOfAccrual,
        MethodOfInstruction,
        PeriodOfTime,
        PhysicalMedium,
        PhysicalResource,
        Point,
        Policy,
        ProvenanceStatement,
        RFC1766,
        RFC3066,
        RFC4646,
        RFC5646,
        RightsStatement,
        SizeOrDuration,
        Standard,
        URI,
        W3CDTF,
        accessRights,
        accrualMethod,
        accrualPeriodicity,
        accrualPolicy,
        alternative,
        audience,
        available,
        bibliographicCitation,
        conformsTo,
        contributor,
        coverage,
        created,
        creator,
        date,
        dateAccepted,
        dateCopyrighted,
        dateSubmitted,
        description,
        educationLevel,
        extent,
        format,
        hasFormat,
        hasPart,
        hasVersion,
        identifier,
        instructionalMethod,
        isFormatOf,
        isPartOf,
        isReferencedBy,
        isReplacedBy,
        isRequiredBy,
        isVersionOf,
        issued,
        language,
        license,
        mediator,
        medium,
        modified,
        provenance,
        publisher,
        references,
        relation,
        replaces,
        requires,
        rights,
        rightsHolder,
        source,
        spatial,
        subject,
        tableOfContents,
        temporal,
        title,
        valid,
    ],
    renamed [
        ISO639_2 => "ISO639-2",
        ISO639_3 => "ISO639-3",
        abstract_ => "abstract",
        type_ => "type",
    ]
);

vocabulary!(
    /// [DCAT 3](https://www.w3.org/TR/vocab-dcat-3/) vocabulary.
    dcat,
    "dcat",
    "http://www.w3.org/ns/dcat#",
    [
        Catalog,
        CatalogRecord,
        DataService,
        Dataset,
        DatasetSeries,
        Distribution,
        Relationship,
        Resource,
        Role,
        accessService,
        accessURL,
        bbox,
        byteSize,
        catalog,
        centroid,
        compressFormat,
        contactPoint,
        dataset,
        distribution,
        downloadURL,
        endDate,
        endpointDescription,
        endpointURL,
        first,
        hadRole,
        hasCurrentVersion,
        hasVersion,
        inSeries,
        keyword,
        landingPage,
        last,
        mediaType,
        packageFormat,
        prev,
        qualifiedRelation,
        record,
        resource,
        seriesMember,
        service,
        spatialResolutionInMeters,
        startDate,
        temporalResolution,
        theme,
        themeTaxonomy,
        version,
    ]
);

vocabulary!(
    /// [ODRL 2.2](https://www.w3.org/TR/odrl-vocab/) vocabulary.
    odrl,
    "odrl",
    "http://www.w3.org/ns/odrl/2/",
    [
        // policies and rules
        Action,
        Agreement,
        Asset,
        AssetCollection,
        Assertion,
        ConflictTerm,
        Constraint,
        Duty,
        LeftOperand,
        LogicalConstraint,
        Offer,
        Operator,
        Party,
        PartyCollection,
        Permission,
        Policy,
        Privacy,
        Prohibition,
        Request,
        RightOperand,
        Rule,
        Set,
        Ticket,
        // properties
        action,
        and,
        andSequence,
        assignee,
        assigner,
        conflict,
        consequence,
        constraint,
        dataType,
        duty,
        failure,
        function,
        inheritFrom,
        leftOperand,
        obligation,
        operator,
        or,
        output,
        partOf,
        permission,
        profile,
        prohibition,
        refinement,
        relation,
        remedy,
        rightOperand,
        rightOperandReference,
        source,
        status,
        target,
        uid,
        unit,
        xone,
        // actions
        acceptTracking,
        aggregate,
        annotate,
        anonymize,
        archive,
        attribute,
        compensate,
        concurrentUse,
        delete,
        derive,
        digitize,
        display,
        distribute,
        ensureExclusivity,
        execute,
        extract,
        give,
        grantUse,
        include,
        index,
        inform,
        install,
        modify,
        nextPolicy,
        obtainConsent,
        play,
        present,
        print,
        read,
        reproduce,
        reviewPolicy,
        sell,
        stream,
        synchronize,
        textToSpeech,
        transfer,
        transform,
        translate,
        uninstall,
        watermark,
        // operators
        eq,
        gt,
        gteq,
        hasPart,
        isA,
        isAllOf,
        isAnyOf,
        isNoneOf,
        isPartOf,
        lt,
        lteq,
        neq,
        // left operands
        count,
        dateTime,
        delayPeriod,
        deliveryChannel,
        elapsedTime,
        event,
        fileFormat,
        industry,
        language,
        media,
        meteredTime,
        payAmount,
        percentage,
        product,
        purpose,
        recipient,
        resolution,
        spatial,
        spatialCoordinates,
        system,
        systemDevice,
        timeInterval,
        unitOfCount,
        version,
        virtualLocation,
    ],
    renamed [
        move_ => "move",
        use_ => "use",
    ]
);

vocabulary!(
    /// [PROV-O](https://www.w3.org/TR/prov-o/) vocabulary.
    prov,
    "prov",
    "http://www.w3.org/ns/prov#",
    [
        Activity,
        ActivityInfluence,
        Agent,
        AgentInfluence,
        Association,
        Attribution,
        Bundle,
        Collection,
        Communication,
        Delegation,
        Derivation,
        EmptyCollection,
        End,
        Entity,
        EntityInfluence,
        Generation,
        Influence,
        InstantaneousEvent,
        Invalidation,
        Location,
        Organization,
        Person,
        Plan,
        PrimarySource,
        Quotation,
        Revision,
        Role,
        SoftwareAgent,
        Start,
        Usage,
        actedOnBehalfOf,
        activity,
        agent,
        alternateOf,
        atLocation,
        atTime,
        endedAtTime,
        entity,
        generated,
        generatedAtTime,
        hadActivity,
        hadGeneration,
        hadMember,
        hadPlan,
        hadPrimarySource,
        hadRole,
        hadUsage,
        influenced,
        influencer,
        invalidated,
        invalidatedAtTime,
        qualifiedAssociation,
        qualifiedAttribution,
        qualifiedCommunication,
        qualifiedDelegation,
        qualifiedDerivation,
        qualifiedEnd,
        qualifiedGeneration,
        qualifiedInfluence,
        qualifiedInvalidation,
        qualifiedPrimarySource,
        qualifiedQuotation,
        qualifiedRevision,
        qualifiedStart,
        qualifiedUsage,
        specializationOf,
        startedAtTime,
        used,
        value,
        wasAssociatedWith,
        wasAttributedTo,
        wasDerivedFrom,
        wasEndedBy,
        wasGeneratedBy,
        wasInfluencedBy,
        wasInformedBy,
        wasInvalidatedBy,
        wasQuotedFrom,
        wasRevisionOf,
        wasStartedBy,
    ]
);

vocabulary!(
    /// [SKOS](https://www.w3.org/TR/skos-reference/) vocabulary.
    skos,
    "skos",
    "http://www.w3.org/2004/02/skos/core#",
    [
        Collection,
        Concept,
        ConceptScheme,
        OrderedCollection,
        altLabel,
        broadMatch,
        broader,
        broaderTransitive,
        changeNote,
        closeMatch,
        definition,
        editorialNote,
        exactMatch,
        example,
        hasTopConcept,
        hiddenLabel,
        historyNote,
        inScheme,
        mappingRelation,
        member,
        memberList,
        narrowMatch,
        narrower,
        narrowerTransitive,
        notation,
        note,
        prefLabel,
        related,
        relatedMatch,
        scopeNote,
        semanticRelation,
        topConceptOf,
    ]
);

vocabulary!(
    /// [vCard](https://www.w3.org/TR/vcard-rdf/) vocabulary.
    vcard,
    "vcard",
    "http://www.w3.org/2006/vcard/ns#",
    [
        Address,
        Cell,
        Email,
        Fax,
        Group,
        Home,
        Individual,
        Kind,
        Location,
        Organization,
        Tel,
        Voice,
        Work,
        anniversary,
        bday,
        hasAddress,
        hasEmail,
        hasMember,
        hasName,
        hasNote,
        hasOrganizationName,
        hasPhoto,
        hasRole,
        hasTelephone,
        hasTitle,
        hasUID,
        hasURL,
        locality,
        nickname,
        note,
        region,
        role,
        title,
        url,
        value,
    ],
    renamed [
        fn_ => "fn",
        additional_name => "additional-name",
        country_name => "country-name",
        family_name => "family-name",
        given_name => "given-name",
        honorific_prefix => "honorific-prefix",
        honorific_suffix => "honorific-suffix",
        organization_name => "organization-name",
        organization_unit => "organization-unit",
        postal_code => "postal-code",
        street_address => "street-address",
    ]
);

vocabulary!(
    /// [Linked Data Platform](https://www.w3.org/TR/ldp/) vocabulary.
    ldp,
    "ldp",
    "http://www.w3.org/ns/ldp#",
    [
        Ascending,
        BasicContainer,
        Container,
        Descending,
        DirectContainer,
        IndirectContainer,
        MemberSubject,
        NonRDFSource,
        Page,
        PageSortCriterion,
        PreferContainment,
        PreferEmptyContainer,
        PreferMembership,
        PreferMinimalContainer,
        RDFSource,
        Resource,
        constrainedBy,
        contains,
        hasMemberRelation,
        inbox,
        insertedContentRelation,
        isMemberOfRelation,
        member,
        membershipResource,
        pageSequence,
        pageSortCollation,
        pageSortCriteria,
        pageSortOrder,
        pageSortPredicate,
    ]
);

vocabulary!(
    /// The commonly used part of [schema.org](https://schema.org/).
    schema,
    "schema",
    "https://schema.org/",
    [
        ContactPoint,
        CreativeWork,
        Dataset,
        Event,
        Offer,
        Organization,
        Person,
        Place,
        PostalAddress,
        Product,
        Thing,
        WebPage,
        about,
        address,
        author,
        birthDate,
        creator,
        dateCreated,
        dateModified,
        datePublished,
        description,
        email,
        endDate,
        familyName,
        givenName,
        identifier,
        image,
        keywords,
        license,
        location,
        memberOf,
        name,
        sameAs,
        startDate,
        telephone,
        url,
        worksFor,
    ]
);
