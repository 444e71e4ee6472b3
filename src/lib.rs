//! # Veinflow - Node Template Schemas for Visual Workflow Editors
//!
//! **Veinflow** describes the fields of workflow-editor nodes as typed, serializable data.
//! A node template declares each field's type, default value, form widget and whether it is a
//! task parameter or an output slot. The template is what a node-rendering engine draws, and
//! its `task_name` is what the backend executor dispatches on.
//!
//! ## Core Workflow
//!
//! 1.  **Get a Template**: Call a provider such as [`nodes::web_crawlers::bilibili_crawler`],
//!     or look one up by task name in a [`registry::TemplateRegistry`].
//! 2.  **Create an Instance**: A [`instance::NodeInstance`] holds the values a user enters for
//!     one node. It re-evaluates field [`condition::Condition`]s to decide which fields are
//!     relevant.
//! 3.  **Submit**: [`instance::NodeInstance::payload`] checks required fields and produces the
//!     [`instance::TaskPayload`] for the backend task.
//! 4.  **Record Results**: [`instance::NodeInstance::complete_run`] writes the task's results
//!     into the output slots.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veinflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = TemplateRegistry::default_registry()?;
//!     let template = registry.require("web_crawlers.bilibili_crawler")?;
//!
//!     let mut node = NodeInstance::new(template);
//!     node.set_value("url_or_bvid", "BV1xx411c7abc")?;
//!     node.set_value("download_video", true)?;
//!
//!     // `output_video` only matters once a download was requested.
//!     assert!(node.is_relevant("output_video")?);
//!
//!     let payload = node.payload()?;
//!     println!("{}", serde_json::to_string_pretty(&payload)?);
//!     Ok(())
//! }
//! ```

pub mod condition;
pub mod error;
pub mod instance;
pub mod lint;
pub mod nodes;
pub mod prelude;
pub mod registry;
pub mod schema;
