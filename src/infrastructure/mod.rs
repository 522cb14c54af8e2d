//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration is read from and where log files are
//! written, and expands user-supplied paths.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_config_dir, get_data_dir};
