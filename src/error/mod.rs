//! Error Handling Module
//!
//! This module provides the error type shared by every operation of the client:
//! - `AnalyzerError` with one variant per failure kind
//! - `ErrorKind`, a `Copy` discriminant for branching without matching payloads
//! - `ResponseError`, the transport failure wrapper
//!
//! # Example
//!
//! ```rust,ignore
//! use comment_analyzer::error::{AnalyzerError, ErrorKind};
//!
//! let error = AnalyzerError::UnsupportedLanguage("xx".to_string());
//! assert_eq!(error.kind(), ErrorKind::UnsupportedLanguage);
//! assert!(error.is_validation_error());
//! ```

mod conversions;
pub mod types;

pub use types::*;
