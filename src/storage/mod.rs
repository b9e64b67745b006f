//! Tree file access and user configuration

mod config;
mod jsonl;

pub use config::{Config, ConfigError};
pub use jsonl::PersonStore;
