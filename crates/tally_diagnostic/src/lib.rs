mod render;
pub mod source;
pub mod span;

pub use termcolor;
use termcolor::{Color, ColorSpec};

use self::span::{AsSpan, Span};

pub mod prelude {
    pub use super::source::Source;
    pub use super::span::Span;
    pub use super::{Diagnostic, IntoDiagnostic, Severity, Snippet, SnippetKind};
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    pub message: Option<String>,
    pub id: Option<String>,

    pub snippets: Vec<Snippet>,
}

impl Diagnostic {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            message: None,
            id: None,
            snippets: vec![],
        }
    }

    pub fn warning() -> Self {
        Self::new(Severity::Warning)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub label: String,
    pub kind: SnippetKind,
    pub span: Span,
}

impl Snippet {
    pub fn new(kind: SnippetKind, label: impl Into<String>, span: impl AsSpan) -> Self {
        Self {
            label: label.into(),
            kind,
            span: span.as_span(),
        }
    }

    pub fn primary(label: impl Into<String>, span: impl AsSpan) -> Self {
        Self::new(SnippetKind::Primary, label, span)
    }

    pub fn secondary(label: impl Into<String>, span: impl AsSpan) -> Self {
        Self::new(SnippetKind::Secondary, label, span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnippetKind {
    Primary,
    Secondary,
}

/// Conversion of a domain error into a [`Diagnostic`], given whatever context
/// the error needs to describe itself.
pub trait IntoDiagnostic<Context: ?Sized = ()> {
    fn into_diagnostic(self, cx: &Context) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
    fn into_diagnostic(self, _cx: &()) -> Diagnostic {
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Lines of source shown above and below each snippet.
    pub context_size: usize,

    pub error_color: ColorSpec,
    pub warning_color: ColorSpec,

    pub emphasis: ColorSpec,
    pub subtle: ColorSpec,

    pub gutter: &'static str,

    pub underline: &'static str,
    pub underline_after: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        let mut error_color = ColorSpec::new();
        error_color.set_fg(Some(Color::Red));
        error_color.set_bold(true);

        let mut warning_color = ColorSpec::new();
        warning_color.set_fg(Some(Color::Yellow));
        warning_color.set_bold(true);

        let mut subtle = ColorSpec::new();
        subtle.set_italic(true);
        subtle.set_dimmed(true);

        let mut emphasis = ColorSpec::new();
        emphasis.set_bold(true);

        Self {
            context_size: 2,

            error_color,
            warning_color,
            emphasis,
            subtle,

            gutter: "│",

            underline: "^",
            underline_after: "  ",
        }
    }
}
