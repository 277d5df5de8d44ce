//! Rowan-based parser for the card-search query language
//!
//! This module provides a lossless, error-tolerant parser using:
//! - **logos** generates the tokenizer
//! - **rowan** stores the lossless syntax tree
//!
//! We build a lossless CST that preserves all whitespace, then extract a
//! typed AST layer on top. Malformed input never fails: it produces ERROR
//! nodes plus [`SyntaxError`] entries so completion and tooltips keep working
//! mid-edit.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Token stream with offsets
//!     ↓
//! Parser → GreenNode (shared, immutable)
//!     ↓
//! SyntaxNode (rowan) → navigable tree
//!     ↓
//! ast → Program, Query, Tag, Clause views
//!     ↓
//! Engine → queries, settings, constraints, generic AST
//! ```
//!
//! ## Precedence
//!
//! Adjacent terms and explicit `and` bind tighter than `or`:
//! `a b or c` parses as `(a and b) or c`.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod lexer;
mod syntax_kind;

pub use ast::AstNode;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::{
    ScryLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Rowan position and node types used by callers
pub use rowan::{GreenNode, TextRange, TextSize};
