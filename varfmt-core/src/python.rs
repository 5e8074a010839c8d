//! Python bindings for varfmt-core
//!
//! Provides pyo3 FFI interface so debugger scripts can format snapshots
//! without spawning varfmt-server.

use pyo3::prelude::*;

use crate::format::{
    format_multi_line as rust_format_multi_line, format_single_line as rust_format_single_line,
};
use crate::typename;
use crate::variable::Variable;

fn decode(json: &str) -> PyResult<Variable> {
    Variable::from_json(json).map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Render a JSON-encoded variable snapshot on a single line
#[pyfunction]
#[pyo3(signature = (json, include_type=true, full_types=false))]
fn format_single_line(json: &str, include_type: bool, full_types: bool) -> PyResult<String> {
    let variable = decode(json)?;
    Ok(rust_format_single_line(&variable, include_type, full_types))
}

/// Render a JSON-encoded variable snapshot across indented lines
///
/// Args:
///     json: The snapshot, as produced by the debugger's JSON API
///     indent: Prefix for every line after the first
#[pyfunction]
#[pyo3(signature = (json, indent=""))]
fn format_multi_line(json: &str, indent: &str) -> PyResult<String> {
    let variable = decode(json)?;
    Ok(rust_format_multi_line(&variable, indent))
}

#[pyfunction]
fn shorten_type(name: &str) -> String {
    typename::shorten_type(name)
}

#[pyfunction]
fn shorten_function_name(name: &str) -> String {
    typename::shorten_function_name(name)
}

/// varfmt Python module
#[pymodule]
fn varfmt_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(format_single_line, m)?)?;
    m.add_function(wrap_pyfunction!(format_multi_line, m)?)?;
    m.add_function(wrap_pyfunction!(shorten_type, m)?)?;
    m.add_function(wrap_pyfunction!(shorten_function_name, m)?)?;
    Ok(())
}
