//! Constraint context for position-aware suggestion filtering.
//!
//! Around a cursor position, every other tag of the enclosing query falls
//! into one of three buckets:
//! - `required`: AND-ed with the current position, always in effect
//! - `forbidden`: negated tags AND-ed with the position (stored without
//!   their prefix)
//! - `alternatives`: one list per OR branch the position is not in
//!
//! The domain of a multi-query document constrains every query body.

use rowan::TextSize;

use super::expr::QueryTag;
use super::tag::{ancestor_at, tokens_at};
use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintContext {
    pub required: Vec<QueryTag>,
    pub forbidden: Vec<QueryTag>,
    pub alternatives: Vec<Vec<QueryTag>>,
    /// The smallest term containing the position, or the node the position
    /// falls in when it touches no term.
    pub current_node: Option<SyntaxNode>,
}

impl ConstraintContext {
    fn merge(&mut self, other: ConstraintContext) {
        self.required.extend(other.required);
        self.forbidden.extend(other.forbidden);
        self.alternatives.extend(other.alternatives);
    }

    fn add_term(&mut self, node: &SyntaxNode) {
        let Some(tag) = QueryTag::from_term(node) else {
            return;
        };
        if tag.is_negated() {
            self.forbidden.push(tag.positive());
        } else {
            self.required.push(tag);
        }
    }

    /// Whether a candidate tag (or its negation) is already decided by the
    /// document.
    pub fn is_constrained(&self, tag: &QueryTag) -> bool {
        let positive = tag.positive();
        self.required.contains(&positive) || self.forbidden.contains(&positive)
    }
}

/// Classify the tags around `offset`.
pub fn constraint_context(root: &SyntaxNode, offset: TextSize) -> ConstraintContext {
    let mut ctx = ConstraintContext::default();

    let current = ancestor_at(root, offset, ast::is_term_node).or_else(|| {
        tokens_at(root, offset)
            .into_iter()
            .find_map(|token| token.parent())
    });
    let Some(current) = current else {
        // Empty document: classify whatever is there.
        ctx.merge(classify(root));
        return ctx;
    };

    if !ast::is_term_node(&current) {
        ctx.merge(classify(&current));
    }

    let mut node = current.clone();
    while !ast::is_region(node.kind()) {
        let Some(parent) = node.parent() else {
            break;
        };
        match parent.kind() {
            SyntaxKind::AND => {
                for sibling in siblings(&parent, &node) {
                    ctx.merge(classify(&sibling));
                }
            }
            SyntaxKind::OR => {
                for sibling in siblings(&parent, &node) {
                    push_alternatives(&sibling, &mut ctx.alternatives);
                }
            }
            kind if ast::is_region(kind) => {
                for sibling in siblings(&parent, &node) {
                    ctx.merge(classify(&sibling));
                }
            }
            // Clauses and tags only group; queries end the walk.
            SyntaxKind::QUERY => break,
            _ => {}
        }
        node = parent;
    }

    let in_query = current.ancestors().any(|n| n.kind() == SyntaxKind::QUERY);
    if in_query {
        let domain = node
            .ancestors()
            .find_map(ast::Program::cast)
            .and_then(|program| program.domain());
        if let Some(domain) = domain {
            ctx.merge(classify(domain.syntax()));
        }
    }

    tracing::trace!(
        required = ctx.required.len(),
        forbidden = ctx.forbidden.len(),
        alternatives = ctx.alternatives.len(),
        "built constraint context"
    );
    ctx.current_node = Some(current);
    ctx
}

/// Candidates that the document does not already require or forbid at
/// `offset`. A candidate and its negation are dropped together.
pub fn valid_tags_for_position(
    root: &SyntaxNode,
    offset: TextSize,
    candidates: &[QueryTag],
) -> Vec<QueryTag> {
    let ctx = constraint_context(root, offset);
    candidates
        .iter()
        .filter(|tag| !ctx.is_constrained(tag))
        .cloned()
        .collect()
}

/// Expression children of `parent` other than `node`.
fn siblings<'a>(parent: &'a SyntaxNode, node: &'a SyntaxNode) -> impl Iterator<Item = SyntaxNode> + 'a {
    parent
        .children()
        .filter(move |child| child != node && ast::Expr::can_cast(child.kind()))
}

/// Everything a subtree asserts when it is AND-ed with the position.
fn classify(node: &SyntaxNode) -> ConstraintContext {
    let mut ctx = ConstraintContext::default();
    if ast::is_term_node(node) {
        ctx.add_term(node);
        return ctx;
    }
    match node.kind() {
        SyntaxKind::OR => push_alternatives(node, &mut ctx.alternatives),
        SyntaxKind::AND | SyntaxKind::CLAUSE => {
            for child in node.children() {
                ctx.merge(classify(&child));
            }
        }
        kind if ast::is_region(kind) => {
            for child in node.children().filter(|c| ast::Expr::can_cast(c.kind())) {
                ctx.merge(classify(&child));
            }
        }
        _ => {}
    }
    ctx
}

/// One alternative per OR branch, flattening nested OR chains.
fn push_alternatives(node: &SyntaxNode, out: &mut Vec<Vec<QueryTag>>) {
    if node.kind() == SyntaxKind::OR {
        for child in node.children() {
            push_alternatives(&child, out);
        }
        return;
    }
    if !ast::Expr::can_cast(node.kind()) {
        return;
    }
    out.push(classify(node).required);
}
