//! labsight: rule-based extraction and triage of OCR'd lab report text.
//!
//! Feed in the raw text of a scanned blood panel and get back a structured
//! [`MedicalReportAnalysis`]: repaired lab values with reference-range
//! status, detected conditions, overall urgency, header metadata and a
//! patient-facing narrative. Everything is deterministic and offline; an
//! optional [`InsightProvider`] can attach a supplementary summary.
//!
//! ```
//! let analysis = labsight::analyze("CBC RESULTS\nHEMOGLOBIN: 11.2 g/dL");
//! assert_eq!(analysis.lab_values[0].test, "HEMOGLOBIN");
//! ```

pub mod models;
pub mod pipeline;

pub use models::{
    Confidence, ConditionSeverity, DetectedCondition, ExtractedLabValue, MedicalReportAnalysis,
    ReportHeader, ReportType, TestCategory, Urgency, ValueStatus,
};
pub use pipeline::{analyze, analyze_with, to_json, AnalysisError, InsightProvider, NoInsight};
