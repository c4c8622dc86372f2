//! Ignored-fields rule
//!
//! The schema lists properties whose generated fields must not be
//! serialized:
//!
//! ```json
//! {
//!   "ignoredFields": [{"secret": {}}],
//!   "properties": {"secret": {"type": "string"}}
//! }
//! ```
//!
//! Each listed property is resolved to its field name; matching fields get a
//! [`Annotation::JsonIgnore`] marker and a note in their documentation.
//! Entries that match no field are skipped: the schema and the model are
//! allowed to drift apart.

use super::{Rule, RuleFactory};
use crate::model::{Annotation, GeneratedModel};
use crate::schema::{Schema, SchemaNode};

/// Text appended to the documentation of every ignored field
pub const JSON_IGNORED_COMMENT_TEXT: &str = "\n(JsonIgnore)";

/// Marks fields listed in an ignore list as excluded from serialization
#[derive(Debug, Clone, Copy)]
pub struct IgnoredFieldsRule<'a> {
    factory: &'a RuleFactory,
}

impl<'a> IgnoredFieldsRule<'a> {
    /// Create the rule
    pub fn new(factory: &'a RuleFactory) -> Self {
        Self { factory }
    }
}

/// Raw property name named by one ignore-list entry
fn directive_name(directive: &SchemaNode) -> Option<&str> {
    match directive {
        SchemaNode::Object(_) => directive.field_names().next(),
        SchemaNode::Scalar(_) => directive.as_str(),
        _ => None,
    }
}

impl<'a, 'm> Rule<&'m mut GeneratedModel> for IgnoredFieldsRule<'a> {
    fn apply(
        &self,
        node_name: &str,
        node: &SchemaNode,
        model: &'m mut GeneratedModel,
        schema: &Schema,
    ) -> &'m mut GeneratedModel {
        let properties = schema.content().properties();
        let resolver = self.factory.name_resolver();

        for directive in node.elements() {
            let Some(raw_name) = directive_name(directive) else {
                tracing::trace!(node_name, %directive, "ignore entry names no property");
                continue;
            };

            let property = properties.and_then(|p| p.get(raw_name).or_else(|| p.find_value(raw_name)));
            let field_name = resolver.property_name(raw_name, property);

            let Some(field) = model.field_mut(&field_name) else {
                tracing::debug!(
                    node_name,
                    property = raw_name,
                    field = %field_name,
                    "no generated field for ignored property"
                );
                continue;
            };

            field.javadoc_mut().append(JSON_IGNORED_COMMENT_TEXT);
            field.annotate(Annotation::JsonIgnore);
            tracing::trace!(property = raw_name, field = %field_name, "field marked ignored");
        }

        model
    }
}
