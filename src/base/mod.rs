//! Foundation types for the scrycards toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`]: byte offsets into the document
//! - [`LineCol`], [`LineIndex`]: zero-based line and byte column lookup
//!
//! This module has NO dependencies on other scrycards modules.

mod span;

pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Same types rowan uses, so ranges pass through unchanged
pub use text_size;
