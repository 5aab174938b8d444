pub mod analysis;
pub mod enums;
pub mod lab;

pub use analysis::{MedicalReportAnalysis, ReportHeader};
pub use enums::{Confidence, ConditionSeverity, ReportType, TestCategory, Urgency, ValueStatus};
pub use lab::{DetectedCondition, ExtractedLabValue};
