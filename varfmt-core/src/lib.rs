//! varfmt Core Library
//!
//! Turns debugger variable snapshots into text for people to read:
//! - Variable snapshot model
//! - Single-line and multi-line value formatting
//! - Type and function name shortening
//! - Python bindings (pyo3, optional)

pub mod config;
pub mod format;
pub mod protocol;
pub mod typename;
pub mod variable;

#[cfg(feature = "python")]
mod python;

pub use config::{ConfigError, FormatOptions, IntBase};
pub use format::{format_multi_line, format_single_line, Formatter};
pub use protocol::{Request, Response};
pub use typename::{shorten_function_name, shorten_type};
pub use variable::{Kind, SnapshotError, Variable};
