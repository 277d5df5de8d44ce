//! Syntax highlighting: node kind to style tag.

use rowan::TextRange;
use serde::Serialize;

use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};
use crate::registry;

/// Style tag for a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightTag {
    Prefix,
    Argument,
    InvalidArgument,
    Operator,
    Value,
    String,
    Regex,
    Keyword,
    Paren,
    QueryName,
    Invalid,
}

impl HighlightTag {
    /// Index into the LSP semantic token legend.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            HighlightTag::Prefix => 0,
            HighlightTag::Argument => 1,
            HighlightTag::InvalidArgument => 2,
            HighlightTag::Operator => 3,
            HighlightTag::Value => 4,
            HighlightTag::String => 5,
            HighlightTag::Regex => 6,
            HighlightTag::Keyword => 7,
            HighlightTag::Paren => 8,
            HighlightTag::QueryName => 9,
            HighlightTag::Invalid => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    #[serde(skip)]
    pub range: TextRange,
    pub tag: HighlightTag,
}

/// Highlight spans for every non-whitespace token, in document order.
pub fn highlights(root: &SyntaxNode) -> Vec<HighlightSpan> {
    root.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter_map(|token| {
            classify(&token).map(|tag| HighlightSpan {
                range: token.text_range(),
                tag,
            })
        })
        .collect()
}

fn classify(token: &SyntaxToken) -> Option<HighlightTag> {
    let parent = token.parent().map(|p| p.kind());
    if parent == Some(SyntaxKind::ERROR) {
        return Some(HighlightTag::Invalid);
    }
    let tag = match token.kind() {
        SyntaxKind::WHITESPACE => return None,
        SyntaxKind::ERROR => HighlightTag::Invalid,
        SyntaxKind::AND_KW | SyntaxKind::OR_KW => HighlightTag::Keyword,
        SyntaxKind::L_PAREN | SyntaxKind::R_PAREN => HighlightTag::Paren,
        SyntaxKind::STRING => HighlightTag::String,
        SyntaxKind::REGEX => HighlightTag::Regex,
        SyntaxKind::MINUS if parent == Some(SyntaxKind::PREFIX) => HighlightTag::Prefix,
        SyntaxKind::WORD if parent == Some(SyntaxKind::QUERY_NAME) => HighlightTag::QueryName,
        SyntaxKind::COLON if parent == Some(SyntaxKind::QUERY) => HighlightTag::QueryName,
        SyntaxKind::WORD if parent == Some(SyntaxKind::ARGUMENT) => argument_tag(token),
        kind if kind.is_operator() => HighlightTag::Operator,
        _ => HighlightTag::Value,
    };
    Some(tag)
}

/// Arguments of a tag are checked against the registry; a standalone word
/// is a name search and reads as a value.
fn argument_tag(token: &SyntaxToken) -> HighlightTag {
    let in_tag = token
        .parent()
        .and_then(|arg| arg.parent())
        .is_some_and(|p| p.kind() == SyntaxKind::TAG && has_operator(&p));
    if !in_tag {
        HighlightTag::Value
    } else if registry::is_argument(token.text()) {
        HighlightTag::Argument
    } else {
        HighlightTag::InvalidArgument
    }
}

fn has_operator(tag: &SyntaxNode) -> bool {
    tag.children().any(|c| c.kind() == SyntaxKind::OPERATOR)
}
