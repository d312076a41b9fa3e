use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use super::value_objects::{EntityName, EntityNameError};

/// Classifies the kind of ontology entity. A fixed, closed enumeration; the
/// four variants are the only categories a knowledge base partitions into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Ontology class declarations.
    Class,
    /// Named individuals.
    Individual,
    /// Object properties linking individuals.
    #[serde(rename = "Object Property")]
    ObjectProperty,
    /// Data properties holding literal values.
    #[serde(rename = "Data Property")]
    DataProperty,
}

impl Category {
    /// The four categories in canonical block order. Query output follows
    /// this order: classes first, data properties last.
    pub const ALL: [Self; 4] = [
        Self::Class,
        Self::Individual,
        Self::ObjectProperty,
        Self::DataProperty,
    ];

    /// Returns the display label prefixed to each rendered result line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Individual => "Individual",
            Self::ObjectProperty => "Object Property",
            Self::DataProperty => "Data Property",
        }
    }

    /// Returns the lowercase plural noun used in empty-category messages.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Individual => "individuals",
            Self::ObjectProperty => "object properties",
            Self::DataProperty => "data properties",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single named item belonging to one category of the knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    name: EntityName,
}

impl Entity {
    /// Creates a new [`Entity`] with the supplied name.
    #[must_use]
    pub fn new(name: EntityName) -> Self {
        Self { name }
    }

    /// Validates the supplied text and creates an entity from it.
    pub fn named(name: impl Into<String>) -> Result<Self, EntityNameError> {
        Ok(Self::new(EntityName::new(name)?))
    }

    /// Returns the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Aggregates the loaded ontology entities, partitioned by [`Category`].
///
/// The aggregate is populated once by an external loader and treated as
/// immutable for the rest of the session; queries only ever read it. Each
/// category keeps its entities in the order they were added, which is the
/// order every query reproduces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    label: Option<String>,
    classes: Vec<Entity>,
    individuals: Vec<Entity>,
    object_properties: Vec<Entity>,
    data_properties: Vec<Entity>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a human readable label for the knowledge base.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Appends an entity to the given category, preserving insertion order.
    ///
    /// Name uniqueness within a category is inherited from the source
    /// ontology and not re-validated here.
    pub fn add(&mut self, category: Category, entity: Entity) {
        self.entries_mut(category).push(entity);
    }

    /// Validates the name and appends a class declaration.
    pub fn add_class(&mut self, name: impl Into<String>) -> Result<(), EntityNameError> {
        self.add(Category::Class, Entity::named(name)?);
        Ok(())
    }

    /// Validates the name and appends an individual.
    pub fn add_individual(&mut self, name: impl Into<String>) -> Result<(), EntityNameError> {
        self.add(Category::Individual, Entity::named(name)?);
        Ok(())
    }

    /// Validates the name and appends an object property.
    pub fn add_object_property(&mut self, name: impl Into<String>) -> Result<(), EntityNameError> {
        self.add(Category::ObjectProperty, Entity::named(name)?);
        Ok(())
    }

    /// Validates the name and appends a data property.
    pub fn add_data_property(&mut self, name: impl Into<String>) -> Result<(), EntityNameError> {
        self.add(Category::DataProperty, Entity::named(name)?);
        Ok(())
    }

    /// Returns the entities of a category in native order.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[Entity] {
        match category {
            Category::Class => &self.classes,
            Category::Individual => &self.individuals,
            Category::ObjectProperty => &self.object_properties,
            Category::DataProperty => &self.data_properties,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<Entity> {
        match category {
            Category::Class => &mut self.classes,
            Category::Individual => &mut self.individuals,
            Category::ObjectProperty => &mut self.object_properties,
            Category::DataProperty => &mut self.data_properties,
        }
    }
}
