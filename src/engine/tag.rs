//! The tag under the cursor.

use rowan::{TextRange, TextSize, TokenAtOffset};
use serde::Serialize;

use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

/// The parts of the tag at a position, each with its start offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagAtCursor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub argument: String,
    pub arg_start: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val_start: Option<u32>,
    #[serde(skip)]
    pub range: TextRange,
}

/// Candidate tokens at `offset`, the one starting there first.
pub(crate) fn tokens_at(root: &SyntaxNode, offset: TextSize) -> Vec<SyntaxToken> {
    if offset > root.text_range().end() {
        return Vec::new();
    }
    match root.token_at_offset(offset) {
        TokenAtOffset::None => Vec::new(),
        TokenAtOffset::Single(token) => vec![token],
        TokenAtOffset::Between(left, right) => vec![right, left],
    }
}

/// The innermost ancestor of a token at `offset` (inclusive at both ends)
/// of the given kind.
pub(crate) fn ancestor_at(
    root: &SyntaxNode,
    offset: TextSize,
    pred: impl Fn(&SyntaxNode) -> bool,
) -> Option<SyntaxNode> {
    tokens_at(root, offset)
        .into_iter()
        .find_map(|token| token.parent_ancestors().find(|node| pred(node)))
}

/// Find the tag containing `offset`. Returns `None` when the position is not
/// inside a tag, or the tag has no argument (a negated bare string).
pub fn tag_from_tree(root: &SyntaxNode, offset: TextSize) -> Option<TagAtCursor> {
    let node = ancestor_at(root, offset, |n| n.kind() == SyntaxKind::TAG)?;
    let tag = ast::Tag::cast(node)?;
    let argument = tag.argument()?;
    let operator = tag.operator();
    let value = tag.value();

    Some(TagAtCursor {
        prefix: tag.prefix().map(|p| p.text()),
        argument: argument.text(),
        arg_start: argument.syntax().text_range().start().into(),
        operator: operator.as_ref().map(|op| op.text()),
        op_start: operator
            .as_ref()
            .map(|op| op.syntax().text_range().start().into()),
        value: value.as_ref().map(|v| v.raw()),
        val_start: value
            .as_ref()
            .map(|v| v.syntax().text_range().start().into()),
        range: tag.syntax().text_range(),
    })
}
