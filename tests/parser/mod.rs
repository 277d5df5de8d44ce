//! Parser tests
//!
//! Tests for:
//! - Lossless trees over well-formed and malformed input
//! - Query header detection
//! - Error recovery

pub mod tests_parser;
