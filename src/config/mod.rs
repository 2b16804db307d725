//! Configuration module for domain search
//!
//! Provides `SearchConfig` and its builder: which sites to search and where
//! finished URLs are sent.

pub mod builder;
pub mod types;

pub use builder::SearchConfigBuilder;
pub use types::{OutputMode, SearchConfig};
