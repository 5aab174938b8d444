use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a measured value sits relative to its reference range.
///
/// The borderline bands are derived from the range endpoints with fixed
/// multiplicative breakpoints (see `pipeline::extract::classify_status`);
/// downstream urgency and condition rules consume these variants directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueStatus {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    #[serde(rename = "Borderline Low")]
    BorderlineLow,
    Normal,
    #[serde(rename = "Borderline High")]
    BorderlineHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ValueStatus {
    /// Statuses that warrant a findings line. Borderline values are
    /// reported as within range.
    pub fn is_abnormal(self) -> bool {
        !matches!(
            self,
            ValueStatus::Normal | ValueStatus::BorderlineLow | ValueStatus::BorderlineHigh
        )
    }

    pub fn is_critical(self) -> bool {
        matches!(self, ValueStatus::VeryLow | ValueStatus::VeryHigh)
    }

    pub fn is_moderate(self) -> bool {
        matches!(self, ValueStatus::Low | ValueStatus::High)
    }
}

impl fmt::Display for ValueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueStatus::VeryLow => "Very Low",
            ValueStatus::Low => "Low",
            ValueStatus::BorderlineLow => "Borderline Low",
            ValueStatus::Normal => "Normal",
            ValueStatus::BorderlineHigh => "Borderline High",
            ValueStatus::High => "High",
            ValueStatus::VeryHigh => "Very High",
        };
        f.write_str(s)
    }
}

/// Provenance marker for an extracted value: which pattern tier produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// Matched by the first (most standard) pattern configured for the test.
    #[serde(rename = "high")]
    High,
    /// Matched by a later, more OCR-tolerant pattern.
    #[serde(rename = "medium")]
    Medium,
    /// Guessed from bare digit magnitude when named extraction failed.
    #[serde(rename = "medium-fallback")]
    MediumFallback,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::MediumFallback => "medium-fallback",
        };
        f.write_str(s)
    }
}

/// Semantic grouping of a lab test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestCategory {
    #[serde(rename = "CBC")]
    Cbc,
    Chemistry,
}

/// Overall report urgency. Ordered: escalation only, never downgraded
/// within one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Moderate,
    Critical,
}

impl Urgency {
    /// Raise to `other` if it is more severe. The lab-derived level and the
    /// lexical keyword level are reconciled through this, so neither signal
    /// can downgrade the other.
    pub fn escalate_to(&mut self, other: Urgency) {
        if other > *self {
            *self = other;
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Routine => "routine",
            Urgency::Moderate => "moderate",
            Urgency::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Severity attached to a detected condition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionSeverity {
    Moderate,
    Severe,
}

/// Report type, inferred from keyword presence in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Laboratory Report")]
    Laboratory,
    #[serde(rename = "Imaging Report")]
    Imaging,
    #[serde(rename = "Cardiac Assessment")]
    Cardiac,
    #[serde(rename = "Pathology Report")]
    Pathology,
    #[serde(rename = "Hospital Report")]
    Hospital,
    #[serde(rename = "Medication Report")]
    Medication,
    #[serde(rename = "General Medical Report")]
    General,
}

impl ReportType {
    pub fn label(self) -> &'static str {
        match self {
            ReportType::Laboratory => "Laboratory Report",
            ReportType::Imaging => "Imaging Report",
            ReportType::Cardiac => "Cardiac Assessment",
            ReportType::Pathology => "Pathology Report",
            ReportType::Hospital => "Hospital Report",
            ReportType::Medication => "Medication Report",
            ReportType::General => "General Medical Report",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
