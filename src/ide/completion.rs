//! Argument and value completion at a cursor.
//!
//! Two contexts are recognized at the cursor:
//! - a term position (start of a term, or typing an argument word): every
//!   argument alias matching the typed prefix
//! - after an operator (or typing a value): the catalog values for the
//!   tag's argument kind, minus tags the rest of the query already decides

use indexmap::IndexMap;
use rowan::{TextSize, TokenAtOffset};
use serde::Serialize;

use crate::engine::{QueryTag, constraint_context};
use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};
use crate::registry::{self, CompletionInfo, CompletionOptions};

use super::Analysis;

/// What a suggestion inserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Argument,
    Value,
}

impl CompletionKind {
    /// LSP `CompletionItemKind` number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Argument => 5, // Field
            CompletionKind::Value => 12,   // Value
        }
    }
}

/// One suggestion shown in the completion popup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<&'static str>,
    /// Replacement text when it differs from `label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply: Option<String>,
    /// Lower sorts first.
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            info: None,
            display_label: None,
            section: None,
            apply: None,
            sort_priority: 100,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_apply(mut self, text: impl Into<String>) -> Self {
        self.apply = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    fn from_info(info: CompletionInfo) -> Self {
        Self {
            label: info.label,
            kind: CompletionKind::Value,
            detail: info.detail,
            info: info.info,
            display_label: info.display_label,
            section: info.section,
            apply: None,
            sort_priority: 100,
        }
    }

    /// The text the editor should insert.
    pub fn insert_text(&self) -> &str {
        self.apply.as_deref().unwrap_or(&self.label)
    }
}

/// Completions replacing the text from `from` up to the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub from: u32,
    pub items: Vec<CompletionItem>,
}

enum CompletionContext {
    Argument { from: TextSize, prefix: String },
    Value { tag: ast::Tag, from: TextSize, prefix: String },
}

/// Suggestions for the tag under `offset`.
///
/// Returns `None` when the cursor is somewhere nothing can be completed:
/// inside a query name, after a closing paren, or on a value of an
/// unrecognized argument or a free-text argument.
pub fn complete_scrycards(analysis: &Analysis<'_>, offset: TextSize) -> Option<CompletionResult> {
    let root = analysis.syntax();
    if offset > root.text_range().end() {
        return None;
    }
    let options = CompletionOptions::from(analysis.settings());

    let result = match determine_context(root, offset)? {
        CompletionContext::Argument { from, prefix } => CompletionResult {
            from: from.into(),
            items: argument_items(&prefix, options),
        },
        CompletionContext::Value { tag, from, prefix } => CompletionResult {
            from: from.into(),
            items: value_items(analysis, &tag, offset, &prefix, options)?,
        },
    };
    tracing::trace!(
        offset = u32::from(offset),
        items = result.items.len(),
        "computed completions"
    );
    Some(result)
}

/// The token that ends at (or contains) the cursor.
fn token_before(root: &SyntaxNode, offset: TextSize) -> Option<SyntaxToken> {
    match root.token_at_offset(offset) {
        TokenAtOffset::None => None,
        TokenAtOffset::Single(token) => Some(token),
        TokenAtOffset::Between(left, _) => Some(left),
    }
}

fn determine_context(root: &SyntaxNode, offset: TextSize) -> Option<CompletionContext> {
    let Some(token) = token_before(root, offset) else {
        return Some(CompletionContext::Argument {
            from: offset,
            prefix: String::new(),
        });
    };
    let range = token.text_range();
    let parent_kind = token.parent().map(|p| p.kind());
    let typed = || {
        let len = usize::from(offset.min(range.end()) - range.start().min(offset));
        token.text().get(..len).unwrap_or_default().to_string()
    };

    // Cursor before the token: only the start of a term can be completed.
    if offset <= range.start() {
        return at_term_start(&token).then(|| CompletionContext::Argument {
            from: offset,
            prefix: String::new(),
        });
    }

    match (token.kind(), parent_kind) {
        (SyntaxKind::WHITESPACE | SyntaxKind::L_PAREN, _) => Some(CompletionContext::Argument {
            from: offset,
            prefix: String::new(),
        }),
        (SyntaxKind::MINUS, Some(SyntaxKind::PREFIX)) => Some(CompletionContext::Argument {
            from: offset,
            prefix: String::new(),
        }),
        (SyntaxKind::WORD, Some(SyntaxKind::ARGUMENT)) => Some(CompletionContext::Argument {
            from: range.start(),
            prefix: typed(),
        }),
        (kind, Some(SyntaxKind::OPERATOR)) if kind.is_operator() => {
            let tag = enclosing_tag(&token)?;
            Some(CompletionContext::Value {
                tag,
                from: offset,
                prefix: String::new(),
            })
        }
        (SyntaxKind::WORD | SyntaxKind::MINUS, Some(SyntaxKind::VALUE)) => {
            let value = token.parent()?;
            let start = value.text_range().start();
            let prefix = value.text().to_string();
            let len = usize::from(offset - start).min(prefix.len());
            Some(CompletionContext::Value {
                tag: enclosing_tag(&token)?,
                from: start,
                prefix: prefix.get(..len).unwrap_or_default().to_string(),
            })
        }
        (SyntaxKind::STRING, Some(SyntaxKind::STRING_LITERAL)) => {
            let tag = enclosing_tag(&token)?;
            let typed = typed();
            Some(CompletionContext::Value {
                tag,
                from: range.start(),
                prefix: typed.trim_start_matches('"').to_string(),
            })
        }
        _ => None,
    }
}

/// Whether a term could begin right before `token`.
fn at_term_start(token: &SyntaxToken) -> bool {
    let Some(parent) = token.parent() else {
        return true;
    };
    match parent.kind() {
        SyntaxKind::ARGUMENT => true,
        SyntaxKind::PREFIX => true,
        _ => ast::is_region(parent.kind()) || token.kind() == SyntaxKind::L_PAREN,
    }
}

fn enclosing_tag(token: &SyntaxToken) -> Option<ast::Tag> {
    token.parent_ancestors().find_map(ast::Tag::cast)
}

fn argument_items(prefix: &str, options: CompletionOptions) -> Vec<CompletionItem> {
    let prefix = prefix.to_ascii_lowercase();
    registry::all_arguments()
        .filter(|alias| alias.starts_with(prefix.as_str()))
        .filter_map(|alias| {
            let detail = registry::detail_from_arg(alias)?;
            let mut item = CompletionItem::new(alias, CompletionKind::Argument);
            if options.detail {
                item = item.with_detail(detail.detail);
            }
            if options.info {
                item = item.with_info(detail.info);
            }
            Some(item)
        })
        .collect()
}

fn value_items(
    analysis: &Analysis<'_>,
    tag: &ast::Tag,
    offset: TextSize,
    prefix: &str,
    options: CompletionOptions,
) -> Option<Vec<CompletionItem>> {
    let argument = tag.argument()?.text();
    let operator = tag.operator()?.text();
    let kind = registry::arg_type_from_arg(&argument)?;
    let candidates = registry::completion_info_from_arg(kind, analysis.catalog(), options)?;

    let ctx = constraint_context(analysis.syntax(), offset);
    let needle = prefix.to_lowercase();

    let mut items: IndexMap<String, CompletionItem> = IndexMap::new();
    for info in candidates {
        let lowered = info.label.to_lowercase();
        let priority = if lowered.starts_with(&needle) {
            10
        } else if lowered.contains(&needle) {
            50
        } else {
            continue;
        };
        let apply = quote_if_needed(&info.label);
        let candidate = QueryTag::new(argument.as_str(), operator.as_str(), apply.as_str());
        if ctx.is_constrained(&candidate) {
            continue;
        }
        if items.contains_key(&info.label) {
            continue;
        }
        let mut item = CompletionItem::from_info(info).with_priority(priority);
        if apply != item.label {
            item = item.with_apply(apply);
        }
        items.insert(item.label.clone(), item);
    }

    let mut items: Vec<_> = items.into_values().collect();
    items.sort_by_key(|item| item.sort_priority);
    Some(items)
}

/// Values with spaces or query punctuation must be written as strings.
fn quote_if_needed(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | ':' | '=' | '<' | '>' | '!'));
    if needs_quotes {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
