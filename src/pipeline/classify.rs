//! Report-level classification: urgency, named conditions, report type.

use crate::models::{
    ConditionSeverity, DetectedCondition, ExtractedLabValue, ReportType, Urgency, ValueStatus,
};

/// Words whose presence suggests the report itself is flagging a problem.
/// Counted as distinct keywords, not occurrences.
const CRITICAL_INDICATORS: &[&str] = &[
    "critical",
    "severe",
    "urgent",
    "emergency",
    "acute",
    "immediate",
    "abnormal",
    "elevated",
    "concerning",
    "significant",
];

/// Keyword groups scanned in priority order; first group with a hit wins.
const REPORT_TYPE_RULES: &[(ReportType, &[&str])] = &[
    (
        ReportType::Laboratory,
        &["lab", "laboratory", "blood test", "cbc", "hemoglobin", "glucose"],
    ),
    (ReportType::Imaging, &["x-ray", "mri", "ct scan", "ultrasound", "imaging"]),
    (ReportType::Cardiac, &["ecg", "ekg", "echo", "cardiac", "heart"]),
    (ReportType::Pathology, &["biopsy", "pathology", "cytology"]),
    (ReportType::Hospital, &["discharge", "admission", "hospital"]),
    (ReportType::Medication, &["prescription", "medication", "pharmacy"]),
];

/// Urgency implied by the extracted statuses alone: any critical status is
/// critical, any plain high/low is moderate.
pub fn derive_urgency(values: &[ExtractedLabValue]) -> Urgency {
    if values.iter().any(|v| v.status.is_critical()) {
        Urgency::Critical
    } else if values.iter().any(|v| v.status.is_moderate()) {
        Urgency::Moderate
    } else {
        Urgency::Routine
    }
}

/// Urgency implied by the report's own wording. Three or more distinct
/// indicator words reads as critical, one or two as moderate.
pub fn keyword_urgency(text: &str) -> Urgency {
    let lower = text.to_lowercase();
    let hits = CRITICAL_INDICATORS
        .iter()
        .filter(|k| lower.contains(*k))
        .count();
    match hits {
        0 => Urgency::Routine,
        1 | 2 => Urgency::Moderate,
        _ => Urgency::Critical,
    }
}

/// Flag named conditions from per-test status rules. Severity is severe only
/// when the underlying status is at a critical extreme.
pub fn detect_conditions(values: &[ExtractedLabValue]) -> Vec<DetectedCondition> {
    let mut conditions = Vec::new();

    for v in values {
        match (v.test.as_str(), v.status) {
            ("HEMOGLOBIN", ValueStatus::Low | ValueStatus::VeryLow) => {
                conditions.push(DetectedCondition {
                    condition: "Possible Anemia".to_string(),
                    severity: severity_for(v.status),
                    evidence: format!("Hemoglobin: {} {}", v.value, v.unit),
                });
            }
            ("WBC COUNT", ValueStatus::High | ValueStatus::VeryHigh) => {
                conditions.push(DetectedCondition {
                    condition: "Possible Infection/Inflammation".to_string(),
                    severity: severity_for(v.status),
                    evidence: format!("WBC Count: {} {}", v.value, v.unit),
                });
            }
            ("PLATELET COUNT", ValueStatus::Low | ValueStatus::VeryLow) => {
                conditions.push(DetectedCondition {
                    condition: "Thrombocytopenia (Low Platelets)".to_string(),
                    severity: severity_for(v.status),
                    evidence: format!("Platelet Count: {} {}", v.value, v.unit),
                });
            }
            ("PLATELET COUNT", ValueStatus::High | ValueStatus::VeryHigh) => {
                conditions.push(DetectedCondition {
                    condition: "Thrombocytosis (High Platelets)".to_string(),
                    severity: severity_for(v.status),
                    evidence: format!("Platelet Count: {} {}", v.value, v.unit),
                });
            }
            ("GLUCOSE", ValueStatus::High | ValueStatus::VeryHigh) => {
                conditions.push(DetectedCondition {
                    condition: "Possible Hyperglycemia".to_string(),
                    severity: severity_for(v.status),
                    evidence: format!("Glucose: {} {}", v.value, v.unit),
                });
            }
            ("GLUCOSE", ValueStatus::Low | ValueStatus::VeryLow) => {
                conditions.push(DetectedCondition {
                    condition: "Possible Hypoglycemia".to_string(),
                    severity: severity_for(v.status),
                    evidence: format!("Glucose: {} {}", v.value, v.unit),
                });
            }
            _ => {}
        }
    }

    conditions
}

fn severity_for(status: ValueStatus) -> ConditionSeverity {
    if status.is_critical() {
        ConditionSeverity::Severe
    } else {
        ConditionSeverity::Moderate
    }
}

/// Infer the report type from keyword presence, first matching group wins.
pub fn classify_report_type(text: &str) -> ReportType {
    let lower = text.to_lowercase();
    for (report_type, keywords) in REPORT_TYPE_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *report_type;
        }
    }
    ReportType::General
}
