//! # scrycards
//!
//! Parser, query extraction and editor tooling for the Scryfall card-search
//! query language.
//!
//! ## Layers
//!
//! ```text
//! ide       → Editor features (completion, tooltip, highlighting, folding)
//!   ↓
//! engine    → Tree walks: queries/settings, tag at cursor, constraints, generic AST
//!   ↓
//! registry  → Argument aliases → kind, operator class, setting, help text
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! catalog   → Vocabulary snapshot for value completion
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```
//!
//! ## Example
//!
//! ```
//! use scrycards::{parse, queries_from_tree};
//!
//! let parse = parse("order:name\ncreatures: t:creature\ninstants: t:instant order:set");
//! let doc = queries_from_tree(&parse.syntax());
//!
//! assert_eq!(doc.domain.unwrap().settings.order.as_deref(), Some("name"));
//! assert_eq!(doc.queries[0].body.settings.order, None);
//! assert_eq!(doc.queries[1].body.merged_text_no_setting, "t:instant");
//! ```

// ============================================================================
// MODULES (dependency order: base → catalog → parser → registry → engine → ide)
// ============================================================================

/// Foundation types: TextRange, line/column conversion
pub mod base;

/// Error type for catalog and settings loading
pub mod error;

/// Editor settings
pub mod config;

/// Tag catalog: static and fetched vocabularies
pub mod catalog;

/// Parser: Logos lexer, recursive-descent parser, rowan CST
pub mod parser;

/// Argument type registry
pub mod registry;

/// Tree query engine
pub mod engine;

/// Search requests for the card-search API client
pub mod request;

/// IDE features: completion, tooltip, highlighting, folding, diagnostics
pub mod ide;

// Positions used across every layer
pub use base::{LineCol, LineIndex, TextRange, TextSize};

pub use catalog::Catalog;
pub use config::EditorSettings;
pub use engine::{
    QueryDocument, QuerySettings, QueryTag, ast_from_tree, ast_to_string, constraint_context,
    queries_from_tree, tag_from_tree, valid_tags_for_position,
};
pub use error::{Error, Result};
pub use parser::{Parse, SyntaxKind, SyntaxNode, parse};
pub use registry::{ArgKind, OperatorClass, SettingKey, is_argument};
pub use request::SearchRequest;
