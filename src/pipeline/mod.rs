//! Rule-based analysis pipeline for OCR'd lab report text.
//!
//! Stages run strictly in order: OCR cleanup ([`normalize`]), pattern
//! extraction ([`extract`]), magnitude inference for thin results
//! ([`fallback`]), then classification ([`classify`]), header scraping
//! ([`header`]) and narrative assembly ([`narrative`]). The pipeline is
//! total: any text in, one `MedicalReportAnalysis` out.

pub mod classify;
pub mod extract;
pub mod fallback;
pub mod header;
pub mod insight;
pub mod narrative;
pub mod normalize;
pub mod orchestrator;
pub mod specs;

use thiserror::Error;

use crate::models::MedicalReportAnalysis;

pub use insight::{InsightProvider, NoInsight};
pub use orchestrator::{analyze, analyze_with};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to serialize analysis: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render an analysis as a JSON document.
pub fn to_json(analysis: &MedicalReportAnalysis) -> Result<String, AnalysisError> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
