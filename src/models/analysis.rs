use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ReportType, Urgency};
use super::lab::{DetectedCondition, ExtractedLabValue};

/// Loosely-structured header metadata scraped from the report text.
/// Each field is independently optional; unmatched fields keep their
/// "Unknown X" sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportHeader {
    pub lab_name: String,
    pub doctor_name: String,
    pub patient_name: String,
    pub report_date: String,
}

impl Default for ReportHeader {
    fn default() -> Self {
        Self {
            lab_name: "Unknown Lab".to_string(),
            doctor_name: "Unknown Doctor".to_string(),
            patient_name: "Unknown Patient".to_string(),
            report_date: "Unknown Date".to_string(),
        }
    }
}

/// Complete result of one report analysis.
///
/// Constructed fresh per call, fully returned to the caller, never shared.
/// Worst case for degenerate input is a mostly-empty result with routine
/// urgency; there is no "extraction failed" terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalReportAnalysis {
    pub id: Uuid,
    pub report_type: ReportType,
    pub urgency: Urgency,
    pub lab_values: Vec<ExtractedLabValue>,
    pub detected_conditions: Vec<DetectedCondition>,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub header: ReportHeader,
    /// Summary from an optional external capability (see `pipeline::insight`).
    /// Absent when no provider is configured or the provider declines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_summary: Option<String>,
}

impl MedicalReportAnalysis {
    /// Empty analysis with all defaults. This is also the complete result
    /// for empty or degenerate input.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            report_type: ReportType::General,
            urgency: Urgency::Routine,
            lab_values: Vec::new(),
            detected_conditions: Vec::new(),
            findings: Vec::new(),
            recommendations: Vec::new(),
            summary: String::new(),
            header: ReportHeader::default(),
            insight_summary: None,
        }
    }
}

impl Default for MedicalReportAnalysis {
    fn default() -> Self {
        Self::empty()
    }
}
