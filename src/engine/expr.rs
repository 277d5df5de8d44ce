//! Generic AST: a syntax-independent form of a query expression.
//!
//! Lowering drops whitespace and error nodes and turns standalone words,
//! strings and regexes into `name:` tags. Serialization writes the minimum
//! parentheses needed to reparse the same grouping.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::parser::SyntaxNode;
use crate::parser::ast::{self, AstNode};

/// A single `[prefix]argument operator value` unit.
///
/// `value` keeps its source spelling, quotes and slashes included, and is
/// empty when the tag has no value yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<SmolStr>,
    pub argument: SmolStr,
    pub operator: SmolStr,
    pub value: SmolStr,
}

impl QueryTag {
    pub fn new(
        argument: impl Into<SmolStr>,
        operator: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
    ) -> Self {
        Self {
            prefix: None,
            argument: argument.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn negated(mut self) -> Self {
        self.prefix = Some(SmolStr::new_static("-"));
        self
    }

    pub fn is_negated(&self) -> bool {
        self.prefix.is_some()
    }

    /// The same tag without its prefix.
    pub fn positive(&self) -> Self {
        Self {
            prefix: None,
            ..self.clone()
        }
    }

    /// Lower a term node: a tag, or a standalone word, string or regex.
    pub fn from_term(node: &SyntaxNode) -> Option<Self> {
        match ast::Expr::cast(node.clone())? {
            ast::Expr::Tag(tag) => Self::from_tag(&tag),
            ast::Expr::Argument(arg) => Some(Self::name(arg.text())),
            ast::Expr::StringLiteral(s) => Some(Self::name(s.raw())),
            ast::Expr::RegExp(re) => Some(Self::name(re.raw())),
            _ => None,
        }
    }

    fn from_tag(tag: &ast::Tag) -> Option<Self> {
        let prefix = tag.prefix().map(|p| SmolStr::new(p.text()));
        let mut lowered = match (tag.argument(), tag.operator()) {
            (Some(arg), Some(op)) => Self::new(
                arg.text(),
                op.text(),
                tag.value().map(|v| v.raw()).unwrap_or_default(),
            ),
            (Some(arg), None) => Self::name(arg.text()),
            (None, _) => Self::name(tag.value().map(|v| v.raw())?),
        };
        lowered.prefix = prefix;
        Some(lowered)
    }

    fn name(value: impl Into<SmolStr>) -> Self {
        Self::new("name", ":", value)
    }
}

impl fmt::Display for QueryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            f.write_str(prefix)?;
        }
        write!(f, "{}{}{}", self.argument, self.operator, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    And,
    Or,
}

/// A lowered expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Expr {
    Tag {
        tag: QueryTag,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Clause {
        content: Box<Expr>,
    },
}

impl Expr {
    pub fn tag(tag: QueryTag) -> Self {
        Self::Tag { tag }
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn clause(content: Expr) -> Self {
        Self::Clause {
            content: Box::new(content),
        }
    }

    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Every tag in the expression, left to right.
    pub fn tags(&self) -> Vec<&QueryTag> {
        let mut out = Vec::new();
        self.collect_tags(&mut out);
        out
    }

    fn collect_tags<'a>(&'a self, out: &mut Vec<&'a QueryTag>) {
        match self {
            Self::Tag { tag } => out.push(tag),
            Self::Binary { left, right, .. } => {
                left.collect_tags(out);
                right.collect_tags(out);
            }
            Self::Clause { content } => content.collect_tags(out),
        }
    }

    /// Canonical form for comparing logical structure: clauses are removed
    /// and chains of one operator are re-nested to the left.
    pub fn normalized(&self) -> Expr {
        match self {
            Self::Tag { .. } => self.clone(),
            Self::Clause { content } => content.normalized(),
            Self::Binary { op, .. } => {
                let mut operands = Vec::new();
                self.flatten_normalized(*op, &mut operands);
                let mut iter = operands.into_iter();
                let Some(first) = iter.next() else {
                    return self.clone();
                };
                iter.fold(first, |acc, next| Expr::binary(*op, acc, next))
            }
        }
    }

    fn flatten_normalized(&self, chain_op: BinaryOp, out: &mut Vec<Expr>) {
        match self {
            Self::Binary { op, left, right } if *op == chain_op => {
                left.flatten_normalized(chain_op, out);
                right.flatten_normalized(chain_op, out);
            }
            Self::Clause { content } => content.flatten_normalized(chain_op, out),
            other => out.push(other.normalized()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ast_to_string(self))
    }
}

/// Lower any expression or region node to the generic AST.
///
/// Regions (program, domain, query body) and clauses holding several
/// top-level expressions after error recovery are joined with AND. Returns
/// `None` when nothing lowerable remains.
pub fn ast_from_tree(node: &SyntaxNode) -> Option<Expr> {
    if ast::is_region(node.kind()) {
        return lower_all(node.children().filter_map(ast::Expr::cast));
    }
    if node.kind() == crate::parser::SyntaxKind::QUERY {
        return ast::Query::cast(node.clone())?
            .body()
            .and_then(|body| ast_from_tree(body.syntax()));
    }
    lower(ast::Expr::cast(node.clone())?)
}

fn lower(expr: ast::Expr) -> Option<Expr> {
    match expr {
        ast::Expr::Tag(_)
        | ast::Expr::Argument(_)
        | ast::Expr::StringLiteral(_)
        | ast::Expr::RegExp(_) => QueryTag::from_term(expr.syntax()).map(Expr::tag),
        ast::Expr::Clause(clause) => lower_all(clause.expressions()).map(Expr::clause),
        ast::Expr::And(and) => lower_pair(BinaryOp::And, and.lhs(), and.rhs()),
        ast::Expr::Or(or) => lower_pair(BinaryOp::Or, or.lhs(), or.rhs()),
    }
}

fn lower_pair(op: BinaryOp, lhs: Option<ast::Expr>, rhs: Option<ast::Expr>) -> Option<Expr> {
    match (lhs.and_then(lower), rhs.and_then(lower)) {
        (Some(left), Some(right)) => Some(Expr::binary(op, left, right)),
        (left, right) => left.or(right),
    }
}

fn lower_all(exprs: impl Iterator<Item = ast::Expr>) -> Option<Expr> {
    exprs.filter_map(lower).reduce(Expr::and)
}

/// Serialize back to query text.
///
/// AND operands are joined by a space. An AND operand of OR and an OR
/// operand of AND are wrapped in parentheses.
pub fn ast_to_string(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Tag { tag } => out.push_str(&tag.to_string()),
        Expr::Clause { content } => {
            out.push('(');
            write_expr(content, out);
            out.push(')');
        }
        Expr::Binary { op, left, right } => {
            write_operand(*op, left, out);
            out.push_str(match op {
                BinaryOp::And => " ",
                BinaryOp::Or => " or ",
            });
            write_operand(*op, right, out);
        }
    }
}

fn write_operand(parent: BinaryOp, operand: &Expr, out: &mut String) {
    let needs_parens = matches!(operand, Expr::Binary { op, .. } if *op != parent);
    if needs_parens {
        out.push('(');
        write_expr(operand, out);
        out.push(')');
    } else {
        write_expr(operand, out);
    }
}

/// A named (or implicit) query of a lowered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAst {
    pub name: Option<String>,
    pub expr: Option<Expr>,
}

/// A whole document in generic form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAst {
    pub domain: Option<Expr>,
    pub queries: Vec<QueryAst>,
}

impl DocumentAst {
    pub fn normalized(&self) -> DocumentAst {
        DocumentAst {
            domain: self.domain.as_ref().map(Expr::normalized),
            queries: self
                .queries
                .iter()
                .map(|q| QueryAst {
                    name: q.name.clone(),
                    expr: q.expr.as_ref().map(Expr::normalized),
                })
                .collect(),
        }
    }
}

/// Lower a whole program, keeping its domain/query structure.
pub fn document_ast(root: &SyntaxNode) -> DocumentAst {
    let Some(program) = ast::Program::cast(root.clone()) else {
        return DocumentAst::default();
    };
    if !program.has_named_queries() {
        return DocumentAst {
            domain: None,
            queries: ast_from_tree(root)
                .map(|expr| QueryAst {
                    name: None,
                    expr: Some(expr),
                })
                .into_iter()
                .collect(),
        };
    }
    DocumentAst {
        domain: program.domain().and_then(|d| ast_from_tree(d.syntax())),
        queries: program
            .queries()
            .map(|query| QueryAst {
                name: query.name().map(|n| n.text()),
                expr: query.body().and_then(|b| ast_from_tree(b.syntax())),
            })
            .collect(),
    }
}

/// Serialize a document: the domain on the first line, then one
/// `name: expression` line per query.
pub fn document_to_string(doc: &DocumentAst) -> String {
    let mut lines = Vec::new();
    if let Some(domain) = &doc.domain {
        lines.push(ast_to_string(domain));
    }
    for query in &doc.queries {
        let expr = query.expr.as_ref().map(ast_to_string);
        let line = match (&query.name, expr) {
            (Some(name), Some(expr)) => format!("{name}: {expr}"),
            (Some(name), None) => format!("{name}:"),
            (None, Some(expr)) => expr,
            (None, None) => continue,
        };
        lines.push(line);
    }
    lines.join("\n")
}
