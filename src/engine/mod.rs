//! Tree query engine.
//!
//! Pure functions over a parsed document:
//! - [`queries_from_tree`] - domain, queries and their settings
//! - [`tag_from_tree`] - the tag under the cursor
//! - [`constraint_context`] / [`valid_tags_for_position`] - what the rest of
//!   the query already requires, forbids or offers as alternatives
//! - [`ast_from_tree`] / [`ast_to_string`] - the generic AST and its
//!   serialization
//!
//! None of these fail. Malformed input yields partial results, and a
//! position with nothing relevant yields `None` or empty collections.

mod constraints;
mod expr;
mod queries;
mod tag;

pub use constraints::{ConstraintContext, constraint_context, valid_tags_for_position};
pub use expr::{
    BinaryOp, DocumentAst, Expr, QueryAst, QueryTag, ast_from_tree, ast_to_string, document_ast,
    document_to_string,
};
pub use queries::{Domain, Query, QueryDocument, QueryName, QuerySettings, Segment, queries_from_tree};
pub use tag::{TagAtCursor, tag_from_tree};
