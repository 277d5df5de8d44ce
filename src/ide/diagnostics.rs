//! Diagnostics: syntax errors plus tags the registry rejects.

use rowan::TextRange;
use serde::Serialize;

use crate::parser::SyntaxNode;
use crate::parser::ast::{self, AstNode};
use crate::registry;

use super::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(skip)]
    pub range: TextRange,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn error(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// All diagnostics for the snapshot, sorted by position.
pub fn diagnostics(analysis: &Analysis<'_>) -> Vec<Diagnostic> {
    let mut out: Vec<_> = analysis
        .syntax_errors()
        .iter()
        .map(|err| Diagnostic::error(err.range, err.message.clone()))
        .collect();
    out.extend(tag_diagnostics(analysis.syntax()));
    out.sort_by_key(|d| d.range.start());
    out
}

/// Unrecognized arguments and operators the argument does not accept.
pub fn tag_diagnostics(root: &SyntaxNode) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for tag in root.descendants().filter_map(ast::Tag::cast) {
        let (Some(argument), Some(operator)) = (tag.argument(), tag.operator()) else {
            continue;
        };
        let name = argument.text();
        let Some(node) = registry::node_from_arg(&name) else {
            out.push(Diagnostic::warning(
                argument.syntax().text_range(),
                format!("unknown argument '{name}'"),
            ));
            continue;
        };
        let Some(op) = operator.kind() else {
            continue;
        };
        if !node.operator_class.allows(op) {
            out.push(Diagnostic::error(
                operator.syntax().text_range(),
                format!(
                    "operator '{}' is not valid for '{name}' (expected one of {})",
                    operator.text(),
                    node.operator_class.operators().join(" ")
                ),
            ));
        }
    }
    out
}
