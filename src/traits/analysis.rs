//! Comment analysis capability trait

use async_trait::async_trait;

use crate::error::AnalyzerError;
use crate::types::{AnalyzeResponse, Attribute, AttributeSelection, CommentRequestOptions};

/// Something that can score a comment.
///
/// [`crate::AnalyzerClient`] is the production implementation; code that
/// only needs scores can depend on this trait and swap in a fake in tests.
#[async_trait]
pub trait CommentAnalysisCapability: Send + Sync {
    async fn analyze_comment(
        &self,
        text: &str,
        attributes: Option<AttributeSelection>,
        options: Option<CommentRequestOptions>,
    ) -> Result<AnalyzeResponse, AnalyzerError>;

    fn supported_attributes(&self) -> Vec<Attribute> {
        Attribute::ALL.to_vec()
    }
}
