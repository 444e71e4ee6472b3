//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the veinflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use veinflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let template = NodeTemplate::from_file("path/to/template.json")?;
//! let registry = TemplateRegistry::builder()
//!     .with_defaults()
//!     .with_template(template)
//!     .build()?;
//!
//! for task_name in registry.task_names() {
//!     println!("{}", task_name);
//! }
//! # Ok(())
//! # }
//! ```

// Schema types
pub use crate::schema::{
    FieldSpec, FieldType, FieldValue, FieldValues, NodeTemplate, SelectOption, WidgetKind,
};

// Conditions
pub use crate::condition::Condition;

// Registry, lint and instances
pub use crate::instance::{NodeInstance, TaskPayload};
pub use crate::lint::lint_template;
pub use crate::registry::{TemplateRegistry, TemplateRegistryBuilder};

// Error types
pub use crate::error::{ConditionError, InstanceError, RegistryError, SchemaError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
