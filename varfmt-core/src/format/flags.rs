//! Per-call rendering flags

/// Immutable view of how one node should be rendered.
///
/// Never mutated in place: each recursive call derives its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderFlags {
    /// Rendering the root of the tree
    pub top: bool,
    /// Containers may be spread over several lines
    pub newlines: bool,
    pub include_type: bool,
    /// Show type names as-is instead of shortened
    pub full_types: bool,
}

impl RenderFlags {
    pub fn single_line(include_type: bool, full_types: bool) -> Self {
        Self {
            top: true,
            newlines: false,
            include_type,
            full_types,
        }
    }

    pub fn multi_line() -> Self {
        Self {
            top: true,
            newlines: true,
            include_type: true,
            full_types: false,
        }
    }

    /// Flags for a child node
    pub fn nested(self) -> Self {
        Self { top: false, ..self }
    }

    pub fn with_newlines(self, newlines: bool) -> Self {
        Self { newlines, ..self }
    }

    pub fn with_include_type(self, include_type: bool) -> Self {
        Self {
            include_type,
            ..self
        }
    }
}
