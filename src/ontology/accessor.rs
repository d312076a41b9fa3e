use serde::Serialize;

use super::entities::{Category, Entity, KnowledgeBase};

/// Read-only iteration contract over a loaded knowledge base.
///
/// The query engine is written against this trait rather than a concrete
/// store so the knowledge base is always passed in explicitly, never reached
/// through process-wide state. Implementors must return stable, insertion-
/// ordered slices: repeated calls within a session observe the same entities
/// in the same order, and nothing here may mutate the underlying data.
pub trait KnowledgeAccessor {
    /// Returns the entities of the given category in native order.
    fn entities(&self, category: Category) -> &[Entity];

    /// All class declarations, in native order.
    fn classes(&self) -> &[Entity] {
        self.entities(Category::Class)
    }

    /// All individuals, in native order.
    fn individuals(&self) -> &[Entity] {
        self.entities(Category::Individual)
    }

    /// All object properties, in native order.
    fn object_properties(&self) -> &[Entity] {
        self.entities(Category::ObjectProperty)
    }

    /// All data properties, in native order.
    fn data_properties(&self) -> &[Entity] {
        self.entities(Category::DataProperty)
    }

    /// Total entity count across all four categories.
    fn total(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.entities(*category).len())
            .sum()
    }

    /// Whether every category is empty.
    fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl KnowledgeAccessor for KnowledgeBase {
    fn entities(&self, category: Category) -> &[Entity] {
        self.entries(category)
    }
}

/// Summary DTO describing a knowledge base without enumerating its entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KnowledgeSummary {
    /// Optional label for display purposes.
    pub label: Option<String>,
    /// Number of class declarations.
    pub class_count: usize,
    /// Number of individuals.
    pub individual_count: usize,
    /// Number of object properties.
    pub object_property_count: usize,
    /// Number of data properties.
    pub data_property_count: usize,
}

impl From<&KnowledgeBase> for KnowledgeSummary {
    fn from(knowledge: &KnowledgeBase) -> Self {
        Self {
            label: knowledge.label().map(|label| label.to_string()),
            class_count: knowledge.classes().len(),
            individual_count: knowledge.individuals().len(),
            object_property_count: knowledge.object_properties().len(),
            data_property_count: knowledge.data_properties().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KnowledgeAccessor, KnowledgeSummary};
    use crate::ontology::entities::KnowledgeBase;

    fn seeded() -> KnowledgeBase {
        let mut kb = KnowledgeBase::new().with_label("Math");
        kb.add_class("Ring").expect("class");
        kb.add_class("Polynomial").expect("class");
        kb.add_individual("Euclid").expect("individual");
        kb.add_object_property("hasSubArea").expect("object property");
        kb.add_data_property("hasDifficulty").expect("data property");
        kb
    }

    #[test]
    fn provided_listings_dispatch_through_entities() {
        let kb = seeded();
        assert_eq!(kb.classes().len(), 2);
        assert_eq!(kb.individuals().len(), 1);
        assert_eq!(kb.object_properties().len(), 1);
        assert_eq!(kb.data_properties().len(), 1);
        assert_eq!(kb.total(), 5);
        assert!(!kb.is_empty());
    }

    #[test]
    fn empty_knowledge_base_reports_empty() {
        let kb = KnowledgeBase::new();
        assert_eq!(kb.total(), 0);
        assert!(kb.is_empty());
    }

    #[test]
    fn summary_counts_match_listings() {
        let kb = seeded();
        let summary = KnowledgeSummary::from(&kb);
        assert_eq!(summary.label.as_deref(), Some("Math"));
        assert_eq!(summary.class_count, 2);
        assert_eq!(summary.individual_count, 1);
        assert_eq!(summary.object_property_count, 1);
        assert_eq!(summary.data_property_count, 1);
    }
}
