//! Query and domain extraction.
//!
//! Turns a parsed document into its shared domain prefix and the list of
//! independently executable queries. Setting tags (`order:`, `dir:`,
//! `unique:`) found anywhere in a region are lifted into that region's
//! [`QuerySettings`] and removed from its residual filter text.

use rowan::{TextRange, TextSize};
use serde::{Deserialize, Serialize};

use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};
use crate::registry::{self, SettingKey};

/// Sparse query-wide settings. Unset keys are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuerySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<String>,
}

impl QuerySettings {
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        match key {
            SettingKey::Order => self.order.as_deref(),
            SettingKey::Dir => self.dir.as_deref(),
            SettingKey::Unique => self.unique.as_deref(),
        }
    }

    /// Set `key`, returning the value it replaces.
    pub fn set(&mut self, key: SettingKey, value: String) -> Option<String> {
        let slot = match key {
            SettingKey::Order => &mut self.order,
            SettingKey::Dir => &mut self.dir,
            SettingKey::Unique => &mut self.unique,
        };
        slot.replace(value)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.dir.is_none() && self.unique.is_none()
    }

    /// These settings with unset keys filled from `parent`.
    pub fn inherit_from(&self, parent: &QuerySettings) -> QuerySettings {
        QuerySettings {
            order: self.order.clone().or_else(|| parent.order.clone()),
            dir: self.dir.clone().or_else(|| parent.dir.clone()),
            unique: self.unique.clone().or_else(|| parent.unique.clone()),
        }
    }
}

/// A query's name with its source offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryName {
    pub text: String,
    pub from: u32,
    pub to: u32,
}

/// An expression region: the domain or a query body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Source text with surrounding whitespace trimmed.
    pub text: String,
    /// The text with setting tags removed.
    pub merged_text_no_setting: String,
    pub from: u32,
    pub to: u32,
    pub settings: QuerySettings,
}

impl Segment {
    pub fn range(&self) -> TextRange {
        TextRange::new(TextSize::new(self.from), TextSize::new(self.to))
    }
}

/// The shared prefix before the first named query.
pub type Domain = Segment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// `None` for the implicit query of a document without headers.
    pub name: Option<QueryName>,
    pub body: Segment,
}

impl Query {
    pub fn settings(&self) -> &QuerySettings {
        &self.body.settings
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDocument {
    pub domain: Option<Domain>,
    pub queries: Vec<Query>,
}

/// Extract the domain and queries of a parsed document, in document order.
pub fn queries_from_tree(root: &SyntaxNode) -> QueryDocument {
    let Some(program) = ast::Program::cast(root.clone()) else {
        return QueryDocument::default();
    };

    if !program.has_named_queries() {
        let body = segment(root);
        let queries = if body.text.is_empty() {
            Vec::new()
        } else {
            vec![Query { name: None, body }]
        };
        return QueryDocument {
            domain: None,
            queries,
        };
    }

    let domain = program
        .domain()
        .map(|d| segment(d.syntax()))
        .filter(|d| !d.text.is_empty());
    let queries = program
        .queries()
        .map(|query| {
            let name = query.name().map(|n| {
                let range = n.syntax().text_range();
                QueryName {
                    text: n.text(),
                    from: range.start().into(),
                    to: range.end().into(),
                }
            });
            let body = match query.body() {
                Some(body) => segment(body.syntax()),
                None => empty_segment(query.syntax().text_range().end()),
            };
            Query { name, body }
        })
        .collect();

    QueryDocument { domain, queries }
}

fn empty_segment(at: TextSize) -> Segment {
    Segment {
        text: String::new(),
        merged_text_no_setting: String::new(),
        from: at.into(),
        to: at.into(),
        settings: QuerySettings::default(),
    }
}

/// Build the segment for a region node.
fn segment(region: &SyntaxNode) -> Segment {
    let range = ast::trimmed_range(region);
    let source = region.text().to_string();
    let base = region.text_range().start();
    let local = range - base;
    let text = source[local].to_string();

    let mut settings = QuerySettings::default();
    let mut excluded = Vec::new();
    for expr in region.children().filter_map(ast::Expr::cast) {
        collect_settings(&expr, &mut settings, &mut excluded);
    }
    excluded.sort_by_key(|r: &TextRange| r.start());

    let merged_text_no_setting = residual_text(&source, base, &excluded);

    Segment {
        text,
        merged_text_no_setting,
        from: range.start().into(),
        to: range.end().into(),
        settings,
    }
}

/// Record every setting tag under `expr` and the ranges to strip. Returns
/// whether `expr` consists of settings only, so the caller can drop the
/// `and`/`or` keyword joining it to a sibling and leave parseable text.
fn collect_settings(
    expr: &ast::Expr,
    settings: &mut QuerySettings,
    excluded: &mut Vec<TextRange>,
) -> bool {
    match expr {
        ast::Expr::Tag(tag) => {
            let Some((key, value)) = setting_of(tag) else {
                return false;
            };
            if let Some(previous) = settings.set(key, value) {
                tracing::trace!(
                    setting = key.as_str(),
                    previous = %previous,
                    "setting overridden by a later tag"
                );
            }
            excluded.push(tag.syntax().text_range());
            true
        }
        ast::Expr::And(and) => {
            collect_binary(and.lhs(), and.rhs(), and.keyword(), settings, excluded)
        }
        ast::Expr::Or(or) => collect_binary(or.lhs(), or.rhs(), or.keyword(), settings, excluded),
        ast::Expr::Clause(clause) => {
            let mut any = false;
            let mut all = true;
            for inner in clause.expressions() {
                let only = collect_settings(&inner, settings, excluded);
                any = true;
                all &= only;
            }
            let only = any && all;
            if only {
                excluded.push(clause.syntax().text_range());
            }
            only
        }
        _ => false,
    }
}

fn collect_binary(
    lhs: Option<ast::Expr>,
    rhs: Option<ast::Expr>,
    keyword: Option<SyntaxToken>,
    settings: &mut QuerySettings,
    excluded: &mut Vec<TextRange>,
) -> bool {
    let lhs_only = lhs
        .as_ref()
        .is_some_and(|lhs| collect_settings(lhs, settings, excluded));
    let rhs_only = rhs
        .as_ref()
        .is_some_and(|rhs| collect_settings(rhs, settings, excluded));
    if let Some(keyword) = keyword.filter(|_| lhs_only || rhs_only) {
        excluded.push(keyword.text_range());
    }
    lhs_only && rhs_only
}

/// The setting an unprefixed tag configures, with its unquoted value.
fn setting_of(tag: &ast::Tag) -> Option<(SettingKey, String)> {
    if tag.is_negated() {
        return None;
    }
    let key = registry::setting_from_arg(&tag.argument()?.text())?;
    let op = tag.operator()?.kind()?;
    if !matches!(op, SyntaxKind::COLON | SyntaxKind::EQ) {
        return None;
    }
    let value = tag.value()?.unquoted();
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Source text with `excluded` ranges removed: the remaining pieces,
/// trimmed, empty ones dropped, joined by single spaces except next to a
/// parenthesis.
fn residual_text(source: &str, base: TextSize, excluded: &[TextRange]) -> String {
    let mut pieces = Vec::new();
    let mut cursor = 0usize;
    for range in excluded {
        let start = usize::from(range.start() - base);
        let end = usize::from(range.end() - base);
        if start >= cursor {
            pieces.push(&source[cursor..start]);
        }
        cursor = cursor.max(end);
    }
    pieces.push(&source[cursor..]);

    let mut out = String::new();
    for piece in pieces.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        // No gap is left inside parentheses a stripped tag touched.
        if !out.is_empty() && !out.ends_with('(') && !piece.starts_with(')') {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}
