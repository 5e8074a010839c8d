//! JSON-RPC Protocol definitions
//!
//! Defines the messages exchanged between a debugger script and varfmt-server.

use crate::variable::Variable;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Request from a client to varfmt-server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Request {
    /// Render a snapshot on a single line
    #[serde(rename = "format")]
    Format {
        variable: Variable,
        #[serde(default = "default_true")]
        include_type: bool,
        #[serde(default)]
        full_types: bool,
    },

    /// Render a snapshot across indented lines
    #[serde(rename = "format_multiline")]
    FormatMultiline {
        variable: Variable,
        #[serde(default)]
        indent: String,
    },

    #[serde(rename = "shorten_type")]
    ShortenType { name: String },

    #[serde(rename = "shorten_function")]
    ShortenFunction { name: String },

    /// Shutdown the server
    #[serde(rename = "shutdown")]
    Shutdown,
}

/// Response from varfmt-server to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Formatted { text: String },
    Shortened { name: String },
    Success { ok: bool },
    Error { error: String },
}

impl Response {
    pub fn success() -> Self {
        Response::Success { ok: true }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Response::Error { error: msg.into() }
    }

    pub fn formatted(text: impl Into<String>) -> Self {
        Response::Formatted { text: text.into() }
    }

    pub fn shortened(name: impl Into<String>) -> Self {
        Response::Shortened { name: name.into() }
    }
}

/// JSON-RPC message wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcMessage<T> {
    pub jsonrpc: String,
    pub id: Option<u64>,
    #[serde(flatten)]
    pub content: T,
}

impl<T> RpcMessage<T> {
    pub fn new(id: u64, content: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            content,
        }
    }
}
