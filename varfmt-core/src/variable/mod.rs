//! Variable snapshot model
//!
//! A tree of typed, possibly truncated nodes as delivered by a debugging
//! session. The formatter only ever reads it.

mod kind;

pub use kind::Kind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to decode variable snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One node of a variable snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variable {
    /// Field name, or the expression that produced the value
    pub name: String,
    pub addr: u64,
    /// Placeholder child: only the address is known, the target was not loaded
    pub only_addr: bool,
    /// Fully qualified type name, may be empty for nil pointers
    #[serde(rename = "type")]
    pub type_name: String,
    pub kind: Kind,
    /// Leaf text; a prefix of the real value when truncated
    pub value: String,
    /// Declared length, may exceed `children.len()`
    pub len: i64,
    pub cap: i64,
    pub base: u64,
    pub children: Vec<Variable>,
    /// Non-empty when the debugger could not read this value
    pub unreadable: String,
}

impl Variable {
    pub fn new(kind: Kind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Decode a snapshot from the debugger's JSON representation
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_addr(mut self, addr: u64) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    pub fn with_len(mut self, len: i64) -> Self {
        self.len = len;
        self
    }

    pub fn with_cap(mut self, cap: i64) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_children(mut self, children: Vec<Variable>) -> Self {
        self.children = children;
        self
    }

    pub fn with_unreadable(mut self, message: impl Into<String>) -> Self {
        self.unreadable = message.into();
        self
    }

    pub fn with_only_addr(mut self, only_addr: bool) -> Self {
        self.only_addr = only_addr;
        self
    }

    /// True for a nil value below the top level: no address and no leaf text.
    pub fn is_absent(&self) -> bool {
        self.addr == 0 && self.value.is_empty()
    }

    pub fn is_unreadable(&self) -> bool {
        !self.unreadable.is_empty()
    }

    /// Kind reached by following the chain of pointer children.
    ///
    /// Returns the first non-pointer kind (or `Ptr` if a pointer has no
    /// child) and whether at least one pointer was crossed.
    pub fn recursive_kind(&self) -> (Kind, bool) {
        let mut node = self;
        let mut through_ptr = false;
        while node.kind == Kind::Ptr {
            through_ptr = true;
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
        (node.kind, through_ptr)
    }

    /// Number of children missing relative to the declared length.
    ///
    /// `shown` is the count of displayed elements (pairs for maps).
    pub(crate) fn omitted(&self, shown: usize) -> i64 {
        self.len.saturating_sub(shown as i64)
    }
}
