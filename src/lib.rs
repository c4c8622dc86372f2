//! # schemagen
//!
//! Generation rules for turning JSON Schema into code.
//!
//! This crate holds the rule layer of a schema-to-code generator:
//!
//! - Marking generated fields listed under `ignoredFields` as excluded from
//!   serialization ([`rules::IgnoredFieldsRule`])
//! - Pluggable property naming ([`naming::NameResolver`])
//! - Validating schema ids before they become package paths
//!   ([`packages::normalize_schema_id`])
//! - Classifying and resolving schema source locators
//!   ([`locations::parse_protocol`], [`locations::parse_url`])
//!
//! ## Example
//!
//! ```rust
//! use schemagen::model::{Annotation, GeneratedModel, ModelField};
//! use schemagen::rules::RuleFactory;
//! use schemagen::schema::Schema;
//!
//! let schema = Schema::from_str(
//!     r#"{"ignoredFields": [{"secret": {}}], "properties": {"secret": {"type": "string"}}}"#,
//! )?;
//! let mut model = GeneratedModel::new("Account").with_field(ModelField::new("secret", "String"));
//!
//! RuleFactory::default().apply_schema_rules(&schema, &mut model);
//!
//! assert!(model.field("secret").unwrap().has_annotation(&Annotation::JsonIgnore));
//! # Ok::<(), schemagen::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod config;
pub mod error;

// Schema ids and locators
pub mod locations;
pub mod packages;

// Schema and code model views
pub mod model;
pub mod naming;
pub mod schema;

// Rules
pub mod rules;

// Loading
pub mod loaders;

// Re-exports for convenience
pub use error::{Error, IdentifierIssue, Result};

/// Version of the schemagen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
