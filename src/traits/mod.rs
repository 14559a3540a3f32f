//! Capability traits

mod analysis;

pub use analysis::CommentAnalysisCapability;
