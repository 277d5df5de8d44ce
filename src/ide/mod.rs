//! IDE features: high-level APIs for editor integrations.
//!
//! This module provides the interface between the tree query engine and a
//! host editor. Each function corresponds to one editor request.
//!
//! ## Conventions
//!
//! 1. **Snapshot in, values out**: no feature mutates the host
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//! 3. **Composable**: Built on top of the engine and the registry
//!
//! ## Usage
//!
//! Editors hold one `AnalysisHost` per document:
//!
//! ```
//! use scrycards::ide::AnalysisHost;
//! use scrycards::TextSize;
//!
//! let mut host = AnalysisHost::new();
//! host.set_text("order:name\nelves: t:elf c:");
//!
//! let analysis = host.analysis();
//! let completions = analysis.completions(TextSize::new(26)).unwrap();
//! assert!(completions.items.iter().any(|item| item.label == "g"));
//! ```

mod analysis;
mod completion;
mod diagnostics;
mod folding;
mod highlight;
mod hover;
mod indent;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, CompletionResult, complete_scrycards};
pub use diagnostics::{Diagnostic, Severity, diagnostics, tag_diagnostics};
pub use folding::{FoldingKind, FoldingRange, folding_ranges};
pub use highlight::{HighlightSpan, HighlightTag, highlights};
pub use hover::{Tooltip, tooltip};
pub use indent::{INDENT_UNIT, indent_level, indentation};
