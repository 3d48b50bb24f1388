//! # Utilities Library
//!
//! Environment variable readers used by configuration loading.

pub mod envs;

// Re-export commonly used functions
pub use envs::{get_env, get_env_bool, get_env_bool_or, get_env_parse, get_env_parse_or};
