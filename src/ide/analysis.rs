//! AnalysisHost and Analysis: state management for IDE features.
//!
//! The `AnalysisHost` owns the document text, its parse, the catalog and the
//! editor settings, and provides `Analysis` snapshots for querying. This
//! pattern ensures consistent reads across multiple queries.
//!
//! ## Usage
//!
//! ```
//! use scrycards::ide::AnalysisHost;
//! use scrycards::TextSize;
//!
//! let mut host = AnalysisHost::new();
//! host.set_text("t:elf c:");
//!
//! let analysis = host.analysis();
//! let tooltip = analysis.tooltip(TextSize::new(1)).unwrap();
//! assert!(tooltip.text.starts_with("t - "));
//! ```

use std::sync::Arc;

use rowan::{TextRange, TextSize};

use crate::base::LineIndex;
use crate::catalog::Catalog;
use crate::config::EditorSettings;
use crate::engine::{self, ConstraintContext, DocumentAst, QueryDocument, TagAtCursor};
use crate::parser::{Parse, SyntaxError, SyntaxNode, parse};

use super::{
    CompletionResult, Diagnostic, FoldingRange, HighlightSpan, Tooltip, complete_scrycards,
    diagnostics, folding_ranges, highlights, indent_level, tooltip,
};

/// Holds the document text, its parse and the catalog between edits.
///
/// Apply changes via `set_text()` or `apply_edit()`, then get a consistent
/// snapshot via `analysis()`.
pub struct AnalysisHost {
    text: String,
    parse: Parse,
    line_index: LineIndex,
    catalog: Arc<Catalog>,
    settings: EditorSettings,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a host with an empty document and the default catalog.
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(Catalog::default()))
    }

    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            text: String::new(),
            parse: parse(""),
            line_index: LineIndex::new(""),
            catalog,
            settings: EditorSettings::default(),
        }
    }

    /// Replace the whole document. Returns the syntax errors of the new parse.
    pub fn set_text(&mut self, text: impl Into<String>) -> &[SyntaxError] {
        self.text = text.into();
        self.reparse();
        &self.parse.errors
    }

    /// Replace `range` with `replacement` and reparse.
    ///
    /// Ranges past the end are clamped. An edit that would split a UTF-8
    /// character is ignored and returns `false`.
    pub fn apply_edit(&mut self, range: TextRange, replacement: &str) -> bool {
        let len = TextSize::of(self.text.as_str());
        let start = usize::from(range.start().min(len));
        let end = usize::from(range.end().min(len));
        if !self.text.is_char_boundary(start) || !self.text.is_char_boundary(end) {
            tracing::warn!(?range, "edit does not fall on character boundaries");
            return false;
        }
        self.text.replace_range(start..end, replacement);
        self.reparse();
        true
    }

    /// Replace the catalog snapshot wholesale.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn reparse(&mut self) {
        self.parse = parse(&self.text);
        self.line_index = LineIndex::new(&self.text);
        tracing::debug!(
            len = self.text.len(),
            errors = self.parse.errors.len(),
            "reparsed document"
        );
    }

    /// Borrow the current state for read-only requests.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            text: &self.text,
            parse: &self.parse,
            root: self.parse.syntax(),
            line_index: &self.line_index,
            catalog: &self.catalog,
            settings: self.settings,
        }
    }
}

/// Read-only view of one document revision.
///
/// Every editor request is answered from the same parse.
pub struct Analysis<'a> {
    text: &'a str,
    parse: &'a Parse,
    root: SyntaxNode,
    line_index: &'a LineIndex,
    catalog: &'a Catalog,
    settings: EditorSettings,
}

impl<'a> Analysis<'a> {
    // ==================== Editor features ====================

    pub fn completions(&self, offset: TextSize) -> Option<CompletionResult> {
        complete_scrycards(self, offset)
    }

    pub fn tooltip(&self, offset: TextSize) -> Option<Tooltip> {
        tooltip(self, offset)
    }

    pub fn highlights(&self) -> Vec<HighlightSpan> {
        highlights(&self.root)
    }

    pub fn folding_ranges(&self) -> Vec<FoldingRange> {
        folding_ranges(&self.root, self.line_index)
    }

    /// Clause nesting depth for a new line at `offset`.
    pub fn indent_level(&self, offset: TextSize) -> usize {
        indent_level(&self.root, offset)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        diagnostics(self)
    }

    // ==================== Engine queries ====================

    pub fn queries(&self) -> QueryDocument {
        engine::queries_from_tree(&self.root)
    }

    pub fn tag_at(&self, offset: TextSize) -> Option<TagAtCursor> {
        engine::tag_from_tree(&self.root, offset)
    }

    pub fn constraint_context(&self, offset: TextSize) -> ConstraintContext {
        engine::constraint_context(&self.root, offset)
    }

    pub fn document_ast(&self) -> DocumentAst {
        engine::document_ast(&self.root)
    }

    // --- accessors ---

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn syntax_errors(&self) -> &'a [SyntaxError] {
        &self.parse.errors
    }

    pub fn line_index(&self) -> &'a LineIndex {
        self.line_index
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn settings(&self) -> EditorSettings {
        self.settings
    }
}
