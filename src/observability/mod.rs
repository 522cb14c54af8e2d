//! File-based diagnostics through `tracing`.
//!
//! Diagnostics are written to a log file because the terminal carries the
//! rendered UI.
//!
//! # Features
//!
//! - **File Output**: `<data_dir>/photogrid/photogrid.log` unless `log_file` is set
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Filtering**: `RUST_LOG` first, then `trace_level`, then `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, log_file_path};
