//! Typed views over query syntax nodes.
//!
//! This module provides strongly-typed accessors for query syntax nodes.
//! A view is a cheap newtype around a SyntaxNode with accessors for the
//! children that matter to it.

use rowan::TextRange;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Checked conversion from an untyped node
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Text range of a node without its leading and trailing whitespace.
///
/// Empty nodes (and whitespace-only nodes) collapse to an empty range at the
/// node's start.
pub fn trimmed_range(node: &SyntaxNode) -> TextRange {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia());
    match tokens.next() {
        Some(first) => {
            let last = tokens.last().unwrap_or_else(|| first.clone());
            TextRange::new(first.text_range().start(), last.text_range().end())
        }
        None => TextRange::empty(node.text_range().start()),
    }
}

fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| !t.kind().is_trivia())
}

// ============================================================================
// Root and regions
// ============================================================================

ast_node!(Program, PROGRAM);

impl Program {
    /// The shared prefix before the first named query, if any.
    pub fn domain(&self) -> Option<Domain> {
        self.0.children().find_map(Domain::cast)
    }

    pub fn queries(&self) -> impl Iterator<Item = Query> + '_ {
        self.0.children().filter_map(Query::cast)
    }

    /// True when the document declares at least one named query.
    pub fn has_named_queries(&self) -> bool {
        self.queries().next().is_some()
    }

    /// Top-level expressions of a document without named queries.
    pub fn expressions(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

ast_node!(Domain, DOMAIN);

impl Domain {
    pub fn expressions(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

ast_node!(Query, QUERY);

impl Query {
    pub fn name(&self) -> Option<QueryName> {
        self.0.children().find_map(QueryName::cast)
    }

    pub fn body(&self) -> Option<QueryBody> {
        self.0.children().find_map(QueryBody::cast)
    }
}

ast_node!(QueryName, QUERY_NAME);

impl QueryName {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(QueryBody, QUERY_BODY);

impl QueryBody {
    pub fn expressions(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

/// Nodes whose children form an implicitly AND-ed expression list.
pub fn is_region(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PROGRAM | SyntaxKind::DOMAIN | SyntaxKind::QUERY_BODY
    )
}

// ============================================================================
// Expressions
// ============================================================================

/// Any expression: a term or a boolean combination of terms.
///
/// A bare `Argument`, `StringLiteral` or `RegExp` at term position is a
/// standalone term (shorthand for a card-name search).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Tag(Tag),
    Argument(Argument),
    StringLiteral(StringLiteral),
    RegExp(RegExp),
    Clause(Clause),
    And(And),
    Or(Or),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::TAG
                | SyntaxKind::ARGUMENT
                | SyntaxKind::STRING_LITERAL
                | SyntaxKind::REG_EXP
                | SyntaxKind::CLAUSE
                | SyntaxKind::AND
                | SyntaxKind::OR
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::TAG => Some(Self::Tag(Tag(node))),
            SyntaxKind::ARGUMENT => Some(Self::Argument(Argument(node))),
            SyntaxKind::STRING_LITERAL => Some(Self::StringLiteral(StringLiteral(node))),
            SyntaxKind::REG_EXP => Some(Self::RegExp(RegExp(node))),
            SyntaxKind::CLAUSE => Some(Self::Clause(Clause(node))),
            SyntaxKind::AND => Some(Self::And(And(node))),
            SyntaxKind::OR => Some(Self::Or(Or(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Tag(n) => n.syntax(),
            Self::Argument(n) => n.syntax(),
            Self::StringLiteral(n) => n.syntax(),
            Self::RegExp(n) => n.syntax(),
            Self::Clause(n) => n.syntax(),
            Self::And(n) => n.syntax(),
            Self::Or(n) => n.syntax(),
        }
    }
}

impl Expr {
    /// True for leaf terms (tags and standalone literals).
    pub fn is_term(&self) -> bool {
        matches!(
            self,
            Self::Tag(_) | Self::Argument(_) | Self::StringLiteral(_) | Self::RegExp(_)
        )
    }
}

/// Whether `node` is a term: a tag, or a standalone literal outside any tag.
pub fn is_term_node(node: &SyntaxNode) -> bool {
    match node.kind() {
        SyntaxKind::TAG => true,
        SyntaxKind::ARGUMENT | SyntaxKind::STRING_LITERAL | SyntaxKind::REG_EXP => {
            node.parent().map(|p| p.kind()) != Some(SyntaxKind::TAG)
        }
        _ => false,
    }
}

ast_node!(And, AND);

impl And {
    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    /// The explicit `and` keyword, absent for implicit conjunction.
    pub fn keyword(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::AND_KW)
    }
}

ast_node!(Or, OR);

impl Or {
    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn keyword(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::OR_KW)
    }
}

ast_node!(Clause, CLAUSE);

impl Clause {
    pub fn expressions(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }

    pub fn is_closed(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::R_PAREN)
    }
}

// ============================================================================
// Tags
// ============================================================================

ast_node!(Tag, TAG);

impl Tag {
    pub fn prefix(&self) -> Option<Prefix> {
        self.0.children().find_map(Prefix::cast)
    }

    pub fn argument(&self) -> Option<Argument> {
        self.0.children().find_map(Argument::cast)
    }

    pub fn operator(&self) -> Option<Operator> {
        self.0.children().find_map(Operator::cast)
    }

    /// The value-like child: a plain value, a string literal or a regex.
    pub fn value(&self) -> Option<TagValue> {
        self.0.children().find_map(TagValue::cast)
    }

    pub fn is_negated(&self) -> bool {
        self.prefix().is_some()
    }
}

/// The value-like part of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagValue {
    Value(Value),
    StringLiteral(StringLiteral),
    RegExp(RegExp),
}

impl AstNode for TagValue {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::VALUE | SyntaxKind::STRING_LITERAL | SyntaxKind::REG_EXP
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::VALUE => Some(Self::Value(Value(node))),
            SyntaxKind::STRING_LITERAL => Some(Self::StringLiteral(StringLiteral(node))),
            SyntaxKind::REG_EXP => Some(Self::RegExp(RegExp(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Value(n) => n.syntax(),
            Self::StringLiteral(n) => n.syntax(),
            Self::RegExp(n) => n.syntax(),
        }
    }
}

impl TagValue {
    /// Source text of the value, quotes and slashes included.
    pub fn raw(&self) -> String {
        self.syntax().text().to_string()
    }

    /// The value with string quoting removed; regexes keep their slashes.
    pub fn unquoted(&self) -> String {
        match self {
            Self::Value(v) => v.text(),
            Self::StringLiteral(s) => s.contents(),
            Self::RegExp(r) => r.raw(),
        }
    }
}

ast_node!(Prefix, PREFIX);

impl Prefix {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(Argument, ARGUMENT);

impl Argument {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    pub fn word(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

ast_node!(Operator, OPERATOR);

impl Operator {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    pub fn kind(&self) -> Option<SyntaxKind> {
        first_token(&self.0).map(|t| t.kind())
    }
}

ast_node!(Value, VALUE);

impl Value {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(StringLiteral, STRING_LITERAL);

impl StringLiteral {
    /// Source text, quotes included.
    pub fn raw(&self) -> String {
        self.0.text().to_string()
    }

    /// The literal's contents with quotes stripped and escapes resolved.
    pub fn contents(&self) -> String {
        let raw = self.raw();
        let inner = raw.strip_prefix('"').unwrap_or(&raw);
        let inner = if inner.ends_with('"') && !inner.ends_with("\\\"") {
            &inner[..inner.len() - 1]
        } else {
            inner
        };
        unescape(inner)
    }
}

ast_node!(RegExp, REG_EXP);

impl RegExp {
    /// Source text, slashes included.
    pub fn raw(&self) -> String {
        self.0.text().to_string()
    }

    /// The pattern between the slashes.
    pub fn pattern(&self) -> String {
        let raw = self.raw();
        let inner = raw.strip_prefix('/').unwrap_or(&raw);
        inner.strip_suffix('/').unwrap_or(inner).to_string()
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
