//! Diagnostic rendering for write conflicts using miette.
//!
//! The rendered path is used as the source code, with the segment that could
//! not be added underlined.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use crate::PathConflictError;

/// A diagnostic that shows the written path with the conflicting segment highlighted.
#[derive(Debug)]
pub struct ConflictDiagnostic {
    /// The error message
    message: String,
    /// The rendered path
    source_code: String,
    /// The span to highlight
    span: SourceSpan,
    /// Label shown under the span
    label: String,
    /// Help text
    help: String,
}

impl core::fmt::Display for ConflictDiagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ConflictDiagnostic {}

impl Diagnostic for ConflictDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn core::fmt::Display + 'a>> {
        Some(Box::new("facet_dotpath::conflict"))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn core::fmt::Display + 'a>> {
        Some(Box::new(self.help.as_str()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(core::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

impl ConflictDiagnostic {
    /// The highlighted byte range in the rendered path, as `(offset, len)`.
    pub fn span(&self) -> (usize, usize) {
        (self.span.offset(), self.span.len())
    }

    /// The rendered path the span points into.
    pub fn rendered_path(&self) -> &str {
        &self.source_code
    }
}

impl PathConflictError {
    /// Create a miette diagnostic for this conflict.
    ///
    /// The diagnostic renders the full path that was written and underlines
    /// the segment that could not be added.
    pub fn to_diagnostic(&self) -> ConflictDiagnostic {
        let source_code = self.path().to_string();
        let (offset, len) = self
            .path()
            .span_of(self.segment_index())
            .unwrap_or((0, source_code.len()));
        let blocked_at = self.blocked_at();

        ConflictDiagnostic {
            message: self.to_string(),
            source_code,
            span: SourceSpan::new(offset.into(), len),
            label: format!("`{blocked_at}` holds {}", self.found_name()),
            help: format!(
                "only objects can take new members; replace `{blocked_at}` with an object or write to a different path"
            ),
        }
    }
}
