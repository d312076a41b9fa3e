use ontology_explorer::{
    Category, KnowledgeAccessor, KnowledgeBase, KnowledgeSummary, QueryEngine, QueryError,
};

fn math_tutor_knowledge() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new().with_label("Math Area Tutor");

    kb.add_class("Algebra").expect("class");
    kb.add_class("Polynomial").expect("class");
    kb.add_class("Ring").expect("class");
    kb.add_class("RootFinding").expect("class");

    kb.add_individual("Euclid").expect("individual");
    kb.add_individual("SquareRoot").expect("individual");
    kb.add_individual("QuadraticFormula").expect("individual");

    kb.add_object_property("hasSubArea").expect("object property");
    kb.add_object_property("isPrerequisiteOf").expect("object property");

    kb.add_data_property("hasDifficulty").expect("data property");
    kb.add_data_property("hasRootCount").expect("data property");

    kb
}

#[test]
fn explorer_supports_browsing_and_search_end_to_end() {
    let kb = math_tutor_knowledge();
    let engine = QueryEngine::new(&kb);

    let classes = engine.fetch_category(Category::Class);
    assert_eq!(
        classes.lines(),
        vec![
            "Class: Algebra".to_string(),
            "Class: Polynomial".to_string(),
            "Class: Ring".to_string(),
            "Class: RootFinding".to_string(),
        ]
    );

    let individuals = engine.fetch_category(Category::Individual);
    assert_eq!(
        individuals.items().map(<[_]>::len),
        Some(kb.individuals().len())
    );

    let object_properties = engine.fetch_category(Category::ObjectProperty);
    assert_eq!(
        object_properties.lines(),
        vec![
            "Object Property: hasSubArea".to_string(),
            "Object Property: isPrerequisiteOf".to_string(),
        ]
    );

    let data_properties = engine.fetch_category(Category::DataProperty);
    assert_eq!(
        data_properties.lines(),
        vec![
            "Data Property: hasDifficulty".to_string(),
            "Data Property: hasRootCount".to_string(),
        ]
    );

    // Whitespace and case fold away before matching.
    let ring = engine.search("  Ring  ").expect("valid query");
    assert_eq!(ring.lines(), vec!["Class: Ring".to_string()]);

    // One pass over every category, block order, no dedup across blocks.
    let root = engine.search("root").expect("valid query");
    assert_eq!(
        root.lines(),
        vec![
            "Class: RootFinding".to_string(),
            "Individual: SquareRoot".to_string(),
            "Data Property: hasRootCount".to_string(),
        ]
    );

    let blank = engine.search("   ").expect_err("blank query");
    assert_eq!(blank, QueryError::BlankQuery);

    let missing = engine.search("zzz_no_such_term").expect("valid query");
    assert_eq!(
        missing.message(),
        Some("No results found for 'zzz_no_such_term'.")
    );
}

#[test]
fn empty_knowledge_base_reports_each_category() {
    let kb = KnowledgeBase::new();
    let engine = QueryEngine::new(&kb);

    let classes = engine.fetch_category(Category::Class);
    assert_eq!(classes.message(), Some("No classes found in the ontology."));

    let data_properties = engine.fetch_category(Category::DataProperty);
    assert_eq!(
        data_properties.message(),
        Some("No data properties found in the ontology.")
    );
}

#[test]
fn boundary_payloads_serialize_for_the_presentation_layer() {
    let kb = math_tutor_knowledge();
    let engine = QueryEngine::new(&kb);

    let summary = KnowledgeSummary::from(&kb);
    let value = serde_json::to_value(&summary).expect("summary json");
    assert_eq!(
        value,
        serde_json::json!({
            "label": "Math Area Tutor",
            "class_count": 4,
            "individual_count": 3,
            "object_property_count": 2,
            "data_property_count": 2,
        })
    );

    let results = engine.search("euclid").expect("valid query");
    let value = serde_json::to_value(&results).expect("results json");
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "hits",
            "items": [{ "category": "Individual", "name": "Euclid" }],
        })
    );
}
