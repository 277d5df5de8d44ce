//! Tooltip implementation.

use rowan::{TextSize, TokenAtOffset};
use serde::Serialize;

use crate::base::LineCol;
use crate::engine::tag_from_tree;
use crate::registry;

use super::Analysis;

/// Result of a tooltip request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// The tooltip content.
    pub text: String,
    /// Offset the tooltip is anchored at.
    pub anchor: u32,
    /// The anchor as a line/column pair for screen placement.
    #[serde(skip)]
    pub line_col: LineCol,
}

/// Get the tooltip for a position.
///
/// On a tag, shows the argument's help text, or a not-recognized message for
/// unknown arguments. Anywhere else the name of the syntax node under the
/// cursor is shown.
pub fn tooltip(analysis: &Analysis<'_>, offset: TextSize) -> Option<Tooltip> {
    let root = analysis.syntax();
    if offset > root.text_range().end() {
        return None;
    }

    let (text, anchor) = match tag_from_tree(root, offset) {
        Some(tag) => {
            let text = match registry::detail_from_arg(&tag.argument) {
                Some(detail) => format!("{} - {}\n{}", tag.argument, detail.detail, detail.info),
                None => format!("{} - not a recognized argument", tag.argument),
            };
            (text, TextSize::new(tag.arg_start))
        }
        None => {
            let token = match root.token_at_offset(offset) {
                TokenAtOffset::None => return None,
                TokenAtOffset::Single(token) => token,
                TokenAtOffset::Between(_, right) => right,
            };
            let node = token.parent()?;
            (
                node.kind().display_name().to_string(),
                node.text_range().start(),
            )
        }
    };

    Some(Tooltip {
        text,
        anchor: anchor.into(),
        line_col: analysis.line_index().line_col(anchor),
    })
}
