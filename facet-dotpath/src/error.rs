//! Error type for path-based writes.

use facet_value::ValueType;

use crate::{Path, Segment};

/// Error returned by [`set`](crate::set) when the path runs into a node that
/// cannot hold the next segment.
///
/// The tree is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConflictError {
    path: Path,
    depth: usize,
    found: Option<ValueType>,
}

impl PathConflictError {
    /// `depth` counts the segments leading to the blocking node and is
    /// always less than `path.len()`.
    pub(crate) fn new(path: Path, depth: usize, found: Option<ValueType>) -> Self {
        debug_assert!(depth < path.len());
        Self { path, depth, found }
    }

    /// The full path that was being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the blocking node sits in the tree.
    pub fn blocked_at(&self) -> Path {
        self.path.prefix(self.depth)
    }

    /// Index into [`path`](Self::path) of the segment that could not be added.
    pub fn segment_index(&self) -> usize {
        self.depth
    }

    /// The segment that could not be added under the blocking node.
    pub fn segment(&self) -> &Segment {
        &self.path.segments()[self.depth]
    }

    /// What was found at [`blocked_at`](Self::blocked_at).
    ///
    /// `None` when an array had no element at the requested position.
    pub fn found(&self) -> Option<ValueType> {
        self.found
    }

    /// Human-readable name of what was found, as used in the error message.
    pub fn found_name(&self) -> &'static str {
        match self.found {
            None => "nothing",
            Some(ValueType::Null) => "null",
            Some(ValueType::Bool) => "a boolean",
            Some(ValueType::Number) => "a number",
            Some(ValueType::String) => "a string",
            Some(ValueType::Array) => "an array",
            Some(ValueType::Object) => "an object",
            Some(_) => "a scalar",
        }
    }
}

impl core::fmt::Display for PathConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "cannot add a nested property `{}` under `{}`: found {}",
            self.segment(),
            self.blocked_at(),
            self.found_name()
        )
    }
}

impl core::error::Error for PathConflictError {}
