//! Built-in node template providers, grouped by node category.
//!
//! Every provider is a zero-argument function returning a fresh
//! [`NodeTemplate`](crate::schema::NodeTemplate). Providers are pure: calling one twice
//! yields equal templates.
pub mod web_crawlers;
