//! Editor request tests
//!
//! Tests for:
//! - Completion while typing
//! - Tooltips
//! - Highlighting
//! - Folding and indentation
//! - Diagnostics
//! - Host edits, settings and catalog swaps

pub mod tests_editing;
pub mod tests_presentation;
