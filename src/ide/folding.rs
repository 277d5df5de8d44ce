//! Folding ranges for clauses and named queries.

use serde::Serialize;

use crate::base::LineIndex;
use crate::parser::ast::trimmed_range;
use crate::parser::{SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingKind {
    Clause,
    Query,
}

/// A foldable line range (0-indexed, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldingRange {
    pub start_line: u32,
    pub end_line: u32,
    pub kind: FoldingKind,
}

/// Folding ranges for every clause and query spanning more than one line,
/// ordered by start position.
pub fn folding_ranges(root: &SyntaxNode, line_index: &LineIndex) -> Vec<FoldingRange> {
    root.descendants()
        .filter_map(|node| {
            let kind = match node.kind() {
                SyntaxKind::CLAUSE => FoldingKind::Clause,
                SyntaxKind::QUERY => FoldingKind::Query,
                _ => return None,
            };
            let range = trimmed_range(&node);
            let start_line = line_index.line_col(range.start()).line;
            let end_line = line_index.line_col(range.end()).line;
            (end_line > start_line).then_some(FoldingRange {
                start_line,
                end_line,
                kind,
            })
        })
        .collect()
}
