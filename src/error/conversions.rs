//! Type Conversions for AnalyzerError
//!
//! `From` implementations for the transport errors surfaced by `reqwest`.

use super::types::{AnalyzerError, ResponseError};

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Response(ResponseError::from_transport(err))
    }
}

impl From<ResponseError> for AnalyzerError {
    fn from(err: ResponseError) -> Self {
        Self::Response(err)
    }
}
