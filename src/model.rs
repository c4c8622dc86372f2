//! Generated code model
//!
//! A minimal view of the class under construction: named fields with a
//! declared type, a documentation buffer and a set of annotations. Rules
//! decorate fields in place; they never add or remove them.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker attached to a generated member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Exclude the member from serialization
    JsonIgnore,
    /// Serialize the member under the given name
    JsonProperty(String),
    /// Any other marker, by name
    Custom(String),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::JsonIgnore => write!(f, "@JsonIgnore"),
            Annotation::JsonProperty(name) => write!(f, "@JsonProperty(\"{}\")", name),
            Annotation::Custom(name) => write!(f, "@{}", name),
        }
    }
}

/// Appendable documentation text of a member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Documentation(String);

impl Documentation {
    /// Create documentation with initial text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Append text to the end of the documentation
    pub fn append(&mut self, text: &str) {
        self.0.push_str(text);
    }

    /// Get the documentation text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if there is no documentation text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Documentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A generated member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelField {
    /// Canonical field name
    name: String,
    /// Declared type, as rendered by the generator
    #[serde(rename = "type")]
    field_type: String,
    /// Documentation buffer
    #[serde(default)]
    javadoc: Documentation,
    /// Applied annotations; attaching is set-like
    #[serde(default)]
    annotations: IndexSet<Annotation>,
}

impl ModelField {
    /// Create a field with no documentation or annotations
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            javadoc: Documentation::default(),
            annotations: IndexSet::new(),
        }
    }

    /// Set initial documentation
    pub fn with_javadoc(mut self, text: impl Into<String>) -> Self {
        self.javadoc = Documentation::new(text);
        self
    }

    /// Attach an annotation while building
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    /// Canonical field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// Documentation of the field
    pub fn javadoc(&self) -> &Documentation {
        &self.javadoc
    }

    /// Mutable documentation of the field
    pub fn javadoc_mut(&mut self) -> &mut Documentation {
        &mut self.javadoc
    }

    /// Attach an annotation. Returns false if it was already present.
    pub fn annotate(&mut self, annotation: Annotation) -> bool {
        self.annotations.insert(annotation)
    }

    /// Check whether an annotation is attached
    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }

    /// Attached annotations, in attachment order
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}

/// Serialized form of a model: fields as a list
#[derive(Serialize, Deserialize)]
struct RawModel {
    name: String,
    #[serde(default)]
    fields: Vec<ModelField>,
}

/// The class under construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModel", into = "RawModel")]
pub struct GeneratedModel {
    /// Class name
    name: String,
    /// Fields keyed by canonical name, in declaration order
    fields: IndexMap<String, ModelField>,
}

impl GeneratedModel {
    /// Create an empty model
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field while building
    pub fn with_field(mut self, field: ModelField) -> Self {
        self.add_field(field);
        self
    }

    /// Add a field. Returns false and leaves the model untouched if a field
    /// with the same name already exists.
    pub fn add_field(&mut self, field: ModelField) -> bool {
        if self.fields.contains_key(field.name()) {
            return false;
        }
        self.fields.insert(field.name.clone(), field);
        true
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields keyed by canonical name
    pub fn fields(&self) -> &IndexMap<String, ModelField> {
        &self.fields
    }

    /// Look up a field by canonical name
    pub fn field(&self, name: &str) -> Option<&ModelField> {
        self.fields.get(name)
    }

    /// Look up a field by canonical name for mutation
    pub fn field_mut(&mut self, name: &str) -> Option<&mut ModelField> {
        self.fields.get_mut(name)
    }
}

impl TryFrom<RawModel> for GeneratedModel {
    type Error = String;

    fn try_from(raw: RawModel) -> std::result::Result<Self, Self::Error> {
        let mut model = GeneratedModel::new(raw.name);
        for field in raw.fields {
            let name = field.name.clone();
            if !model.add_field(field) {
                return Err(format!("duplicate field '{}' in model '{}'", name, model.name));
            }
        }
        Ok(model)
    }
}

impl From<GeneratedModel> for RawModel {
    fn from(model: GeneratedModel) -> Self {
        RawModel {
            name: model.name,
            fields: model.fields.into_values().collect(),
        }
    }
}
