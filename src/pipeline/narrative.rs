//! Patient-facing narrative assembly: findings lines, recommendations, and
//! the one-paragraph summary. All text is deterministic; wording is keyed
//! off urgency and the detected condition set.

use crate::models::{DetectedCondition, ExtractedLabValue, Urgency};

/// One findings line per abnormal value; in-range and borderline values do
/// not clutter the list.
pub fn findings(values: &[ExtractedLabValue]) -> Vec<String> {
    values
        .iter()
        .filter(|v| v.status.is_abnormal())
        .map(|v| format!("{}: {} {} ({})", v.test, v.value, v.unit, v.status))
        .collect()
}

/// Recommendation list for the report's urgency tier, extended with
/// condition-specific advice.
pub fn recommendations(urgency: Urgency, conditions: &[DetectedCondition]) -> Vec<String> {
    let mut recs: Vec<String> = match urgency {
        Urgency::Critical => vec![
            "Consult with your healthcare provider immediately".to_string(),
            "Consider urgent medical evaluation".to_string(),
            "Monitor symptoms closely".to_string(),
        ],
        Urgency::Moderate => vec![
            "Schedule appointment with your healthcare provider within 1-2 weeks".to_string(),
            "Discuss these findings with your doctor".to_string(),
            "May need additional testing or monitoring".to_string(),
        ],
        Urgency::Routine => vec![
            "Continue routine healthcare schedule".to_string(),
            "Bring this report to your next doctor's appointment".to_string(),
            "Maintain healthy lifestyle habits".to_string(),
        ],
    };

    for condition in conditions {
        if condition.condition.contains("Anemia") {
            recs.push("Consider iron-rich diet and iron supplementation evaluation".to_string());
        }
        if condition.condition.contains("Infection") {
            recs.push("Monitor for fever, fatigue, or other infection symptoms".to_string());
        }
    }

    recs
}

/// One-paragraph summary. Abnormal here means outside the borderline bands;
/// at most three abnormal tests are named.
pub fn summarize(values: &[ExtractedLabValue], urgency: Urgency) -> String {
    if values.is_empty() {
        return "Medical report processed. Please consult with your healthcare provider for \
                interpretation."
            .to_string();
    }

    let abnormal: Vec<&ExtractedLabValue> =
        values.iter().filter(|v| v.status.is_abnormal()).collect();

    if abnormal.is_empty() {
        return format!(
            "All {} lab parameters are within normal ranges. Continue routine monitoring.",
            values.len()
        );
    }

    let concerns = abnormal
        .iter()
        .take(3)
        .map(|v| v.test.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    match urgency {
        Urgency::Critical => format!(
            "CRITICAL CONCERN: This report shows significant abnormal findings requiring \
             immediate medical attention. Key concerns: {concerns}."
        ),
        Urgency::Moderate => format!(
            "MODERATE CONCERN: This report shows abnormal findings that need medical follow-up. \
             Key concerns: {concerns}."
        ),
        Urgency::Routine => {
            "ROUTINE: This appears to be a standard medical report. Some values may need routine \
             monitoring."
                .to_string()
        }
    }
}
