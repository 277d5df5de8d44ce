//! Indentation hints for nested clauses.

use rowan::TextSize;

use crate::parser::{SyntaxKind, SyntaxNode};

/// Indentation unit used by [`indentation`].
pub const INDENT_UNIT: &str = "  ";

/// Clause nesting depth for a line starting at `offset`.
///
/// A clause counts when it opens before `offset` and is either unclosed or
/// closes at or after it. A line that starts with `)` sits one level out.
pub fn indent_level(root: &SyntaxNode, offset: TextSize) -> usize {
    let open = root
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::CLAUSE)
        .filter(|clause| {
            let range = clause.text_range();
            if range.start() >= offset {
                return false;
            }
            match closing_paren(clause) {
                Some(close) => offset <= close,
                None => true,
            }
        })
        .count();

    if starts_with_close(root, offset) {
        open.saturating_sub(1)
    } else {
        open
    }
}

/// Whitespace to insert for a new line at `offset`.
pub fn indentation(root: &SyntaxNode, offset: TextSize) -> String {
    INDENT_UNIT.repeat(indent_level(root, offset))
}

fn closing_paren(clause: &SyntaxNode) -> Option<TextSize> {
    clause
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == SyntaxKind::R_PAREN)
        .map(|t| t.text_range().start())
}

/// Whether the first non-whitespace text at `offset` is `)`.
fn starts_with_close(root: &SyntaxNode, offset: TextSize) -> bool {
    root.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| t.text_range().end() > offset && !t.kind().is_trivia())
        .map(|t| t.kind() == SyntaxKind::R_PAREN)
        .next()
        .unwrap_or(false)
}
