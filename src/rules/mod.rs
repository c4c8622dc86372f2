//! Generation rules
//!
//! A rule reads one schema node and decorates the code model built for it.
//! Rules are created by a [`RuleFactory`], which owns the settings and the
//! naming strategy they share.

mod ignored_fields;

pub use ignored_fields::{IgnoredFieldsRule, JSON_IGNORED_COMMENT_TEXT};

use crate::config::GenerationConfig;
use crate::model::GeneratedModel;
use crate::naming::{NameHelper, NameResolver};
use crate::schema::{Schema, SchemaNode};
use std::fmt;

/// A generation rule applied to one schema node
pub trait Rule<T> {
    /// Apply the rule for `node` (found under `node_name` in `schema`) to
    /// `target`, returning the same target.
    fn apply(&self, node_name: &str, node: &SchemaNode, target: T, schema: &Schema) -> T;
}

/// Creates rules and holds what they share
pub struct RuleFactory {
    config: GenerationConfig,
    name_resolver: Box<dyn NameResolver>,
}

impl RuleFactory {
    /// Create a factory using the default naming strategy
    pub fn new(config: GenerationConfig) -> Self {
        let name_resolver = Box::new(NameHelper::from_config(&config));
        Self {
            config,
            name_resolver,
        }
    }

    /// Replace the naming strategy
    pub fn with_name_resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.name_resolver = Box::new(resolver);
        self
    }

    /// Generation settings
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Naming strategy
    pub fn name_resolver(&self) -> &dyn NameResolver {
        self.name_resolver.as_ref()
    }

    /// Rule marking fields listed under the ignore keyword
    pub fn ignored_fields_rule(&self) -> IgnoredFieldsRule<'_> {
        IgnoredFieldsRule::new(self)
    }

    /// Apply every schema-level rule this factory knows to `model`.
    ///
    /// Keywords that are absent, or present with an unexpected shape, are
    /// skipped.
    pub fn apply_schema_rules<'m>(
        &self,
        schema: &Schema,
        model: &'m mut GeneratedModel,
    ) -> &'m mut GeneratedModel {
        let keyword = self.config.ignore_keyword.as_str();
        match schema.content().get(keyword) {
            Some(node) if node.is_array() => {
                self.ignored_fields_rule().apply(keyword, node, model, schema)
            }
            Some(_) => {
                tracing::warn!(keyword, model = model.name(), "ignore list is not an array, skipping");
                model
            }
            None => model,
        }
    }
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl fmt::Debug for RuleFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
