//! Pipeline orchestration: normalize, extract, infer, classify, narrate.
//!
//! `analyze` is the main entry point. It never fails: degenerate input
//! yields an empty analysis with routine urgency and sentinel header fields.

use tracing::{debug, info};

use crate::models::MedicalReportAnalysis;

use super::classify::{classify_report_type, derive_urgency, detect_conditions, keyword_urgency};
use super::extract::{extract_lab_values, preprocess_matching_text};
use super::fallback::infer_missing;
use super::header::extract_header;
use super::insight::InsightProvider;
use super::narrative::{findings, recommendations, summarize};
use super::normalize::normalize_report_text;

/// Input shorter than this after trimming is not worth analyzing.
const MIN_INPUT_LEN: usize = 10;

/// Minimum input length before an insight provider is consulted.
const MIN_INSIGHT_LEN: usize = 50;

/// Run the full analysis pipeline over raw report text.
pub fn analyze(text: &str) -> MedicalReportAnalysis {
    let mut analysis = MedicalReportAnalysis::empty();
    if text.trim().len() < MIN_INPUT_LEN {
        debug!(len = text.trim().len(), "input too short, returning empty analysis");
        return analysis;
    }

    let normalized = normalize_report_text(text);
    let matchable = preprocess_matching_text(&normalized);

    let mut values = extract_lab_values(&matchable);
    let inferred = infer_missing(&matchable, &values);
    values.extend(inferred);

    analysis.urgency = derive_urgency(&values);
    analysis.urgency.escalate_to(keyword_urgency(&normalized));
    analysis.detected_conditions = detect_conditions(&values);
    analysis.report_type = classify_report_type(&normalized);
    analysis.header = extract_header(&normalized);
    analysis.findings = findings(&values);
    analysis.recommendations = recommendations(analysis.urgency, &analysis.detected_conditions);
    analysis.summary = summarize(&values, analysis.urgency);
    analysis.lab_values = values;

    info!(
        id = %analysis.id,
        values = analysis.lab_values.len(),
        conditions = analysis.detected_conditions.len(),
        urgency = %analysis.urgency,
        "report analysis complete"
    );
    analysis
}

/// Like [`analyze`], additionally consulting an insight provider for a
/// supplementary summary when the input carries enough text.
pub fn analyze_with(text: &str, provider: &dyn InsightProvider) -> MedicalReportAnalysis {
    let mut analysis = analyze(text);
    if text.trim().len() >= MIN_INSIGHT_LEN {
        analysis.insight_summary = provider.summarize(text);
    }
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confidence, ConditionSeverity, ReportType, Urgency, ValueStatus};
    use crate::pipeline::insight::NoInsight;

    #[test]
    fn short_input_yields_an_empty_analysis() {
        let analysis = analyze("   x   ");
        assert!(analysis.lab_values.is_empty());
        assert_eq!(analysis.urgency, Urgency::Routine);
        assert_eq!(analysis.header.lab_name, "Unknown Lab");
        assert!(analysis.summary.is_empty());
    }

    #[test]
    fn low_hemoglobin_drives_moderate_urgency_and_anemia() {
        let analysis = analyze("CBC RESULTS\nHEMOGLOBIN: 11.2 g/dL");
        assert_eq!(analysis.lab_values.len(), 1);
        let v = &analysis.lab_values[0];
        assert_eq!(v.test, "HEMOGLOBIN");
        assert_eq!(v.value, 11.2);
        assert_eq!(v.status, ValueStatus::Low);
        assert_eq!(v.confidence, Confidence::High);

        assert_eq!(analysis.urgency, Urgency::Moderate);
        assert_eq!(analysis.detected_conditions.len(), 1);
        assert_eq!(analysis.detected_conditions[0].condition, "Possible Anemia");
        assert_eq!(analysis.report_type, ReportType::Laboratory);
        assert!(analysis.findings[0].contains("(Low)"));
        assert!(analysis.summary.starts_with("MODERATE CONCERN:"));
    }

    #[test]
    fn critical_lab_value_overrides_routine_wording() {
        let analysis = analyze("routine annual checkup HEMOGLOBIN: 7.5 g/dL");
        assert_eq!(analysis.urgency, Urgency::Critical);
        assert_eq!(analysis.lab_values[0].status, ValueStatus::VeryLow);
        assert_eq!(
            analysis.detected_conditions[0].severity,
            ConditionSeverity::Severe
        );
        assert!(analysis.summary.starts_with("CRITICAL CONCERN:"));
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("immediately")));
    }

    #[test]
    fn alarming_wording_alone_raises_urgency() {
        let analysis = analyze("Impression: severe acute abnormal presentation, urgent follow-up");
        assert!(analysis.lab_values.is_empty());
        assert_eq!(analysis.urgency, Urgency::Critical);
    }

    #[test]
    fn corrupted_scan_recovers_header_and_wbc() {
        let text = "Dr. LOGY PATHOLOGY LAB OI73456789 Complete Blood Count (CBC) \
                    Ref. By: Dr. Hiren Shah, Patient: Yash Patel, \
                    HEMOGLOBIN HemcJ 345 WBC COUNT WOC counil 4OdO-tOOO";
        let analysis = analyze(text);

        assert!(analysis.header.lab_name.contains("DRLOGY PATHOLOGY LAB"));
        assert_eq!(analysis.header.doctor_name, "Dr. Hiren Shah");
        assert_eq!(analysis.header.patient_name, "Yash Patel");
        assert_eq!(analysis.report_type, ReportType::Laboratory);

        assert_eq!(analysis.lab_values.len(), 1);
        let v = &analysis.lab_values[0];
        assert_eq!(v.test, "WBC COUNT");
        assert_eq!(v.value, 4.0);
    }

    #[test]
    fn fallback_values_flow_into_the_analysis() {
        // Nothing named matches, but the text reads like a blood panel with
        // a bare scaled count.
        let analysis = analyze("CBC blood panel result 8500 cells recorded");
        assert_eq!(analysis.lab_values.len(), 1);
        let v = &analysis.lab_values[0];
        assert_eq!(v.test, "WBC COUNT");
        assert_eq!(v.value, 8.5);
        assert_eq!(v.confidence, Confidence::MediumFallback);
        assert!(v.context.starts_with("Fallback extraction from:"));
    }

    #[test]
    fn provider_summary_is_supplementary() {
        struct Fixed;
        impl crate::pipeline::insight::InsightProvider for Fixed {
            fn summarize(&self, _text: &str) -> Option<String> {
                Some("external view".to_string())
            }
        }

        let text = "CBC RESULTS HEMOGLOBIN: 13.5 g/dL, all parameters reviewed today";
        let analysis = analyze_with(text, &Fixed);
        assert_eq!(analysis.insight_summary.as_deref(), Some("external view"));
        assert!(!analysis.summary.is_empty(), "rule-based summary still present");

        let analysis = analyze_with(text, &NoInsight);
        assert!(analysis.insight_summary.is_none());
    }

    #[test]
    fn short_input_skips_the_insight_provider() {
        struct Panicky;
        impl crate::pipeline::insight::InsightProvider for Panicky {
            fn summarize(&self, _text: &str) -> Option<String> {
                panic!("provider must not be consulted for short input");
            }
        }
        let analysis = analyze_with("HB low today", &Panicky);
        assert!(analysis.insight_summary.is_none());
    }
}
