use serde::{Deserialize, Serialize};

use super::enums::{Confidence, ConditionSeverity, TestCategory, ValueStatus};

/// One clinical measurement recovered from report text.
///
/// At most one survives per test identifier per report: when several
/// patterns match the same test, the highest-confidence result wins and
/// duplicates are discarded, never averaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedLabValue {
    /// Test identifier, e.g. `"HEMOGLOBIN"`. Matches the static spec table.
    pub test: String,
    pub value: f64,
    /// Canonical unit copied from the spec table, e.g. `"g/dL"`.
    pub unit: String,
    pub status: ValueStatus,
    /// Display form of the reference range, e.g. `"12.0-15.5 g/dL"`.
    pub reference_range: String,
    pub category: TestCategory,
    /// The matched span, kept for audit and debugging.
    pub context: String,
    pub confidence: Confidence,
}

/// A named condition flagged from test-specific status combinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedCondition {
    pub condition: String,
    pub severity: ConditionSeverity,
    /// Human-readable evidence line, e.g. `"Hemoglobin: 8.1 g/dL"`.
    pub evidence: String,
}
