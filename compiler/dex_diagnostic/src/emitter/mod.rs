//! Terminal rendering of diagnostics.
//!
//! Renders through `ariadne`, which prints the offending source lines with
//! labels underneath. Spans are byte offsets, so reports use byte indexing.

use std::io::{self, Write};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::Diagnostic;

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always` or `never`.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Renders diagnostics for one source file.
pub struct TerminalEmitter<'a> {
    /// Name shown in the report header.
    path: &'a str,
    source: &'a str,
    colors: bool,
}

impl<'a> TerminalEmitter<'a> {
    pub fn new(path: &'a str, source: &'a str, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            path,
            source,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write one diagnostic to `writer`.
    pub fn emit(&self, diagnostic: &Diagnostic, writer: impl Write) -> io::Result<()> {
        let offset = diagnostic
            .primary_span()
            .map_or(0, |span| self.clamp(span.start as usize));

        let mut report = Report::build(ReportKind::Error, self.path, offset)
            .with_config(
                Config::default()
                    .with_color(self.colors)
                    .with_index_type(IndexType::Byte),
            )
            .with_code(diagnostic.code.as_str())
            .with_message(&diagnostic.message);

        for label in &diagnostic.labels {
            let start = self.clamp(label.span.start as usize);
            let end = self.clamp(label.span.end as usize).max(start);
            let color = if label.is_primary {
                Color::Red
            } else {
                Color::Blue
            };
            report = report.with_label(
                Label::new((self.path, start..end))
                    .with_message(&label.message)
                    .with_color(color),
            );
        }
        for note in &diagnostic.notes {
            report = report.with_note(note);
        }

        report
            .finish()
            .write((self.path, Source::from(self.source)), writer)
    }

    /// Render one diagnostic to a string.
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = Vec::new();
        match self.emit(diagnostic, &mut out) {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            // Writing to a Vec only fails if ariadne itself does; fall back
            // to the one-line form.
            Err(_) => diagnostic.to_string(),
        }
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.source.len())
    }
}
