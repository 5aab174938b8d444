//! Header metadata scraping: lab name, referring doctor, patient, date.
//!
//! Each field runs its own small pattern family against the normalized text
//! and falls back to its "Unknown X" sentinel independently of the others.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::models::ReportHeader;

static LAB_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"([A-Z][A-Z\s&]+LAB[A-Z\s]*)").unwrap(),
        Regex::new(r"([A-Z][A-Z\s&]+PATHOLOGY[A-Z\s]*)").unwrap(),
        Regex::new(r"([A-Z][A-Z\s&]+DIAGNOSTIC[A-Z\s]*)").unwrap(),
        Regex::new(r"([A-Z][A-Z\s&]+MEDICAL[A-Z\s]*CENTER[A-Z\s]*)").unwrap(),
    ]
});

static DOCTOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(?:Reference\s*By|Ref\.?\s*By|Doctor)[:\s]*Dr\.?\s*([A-Z][A-Za-z\s]+)")
            .unwrap(),
        Regex::new(r"(?i)Dr\.?\s*([A-Z][A-Za-z\s]+)").unwrap(),
    ]
});

static PATIENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Title-case full names only; all-caps words are headings, not names.
        Regex::new(r"(?:Patient|Name)[:\s]*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)").unwrap(),
        Regex::new(r"(?:Mr|Ms|Mrs)\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)").unwrap(),
    ]
});

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?i)(?:Date|Dated|Reported(?:\s*On)?|Collected(?:\s*On)?|Requested(?:\s*On)?)[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
        )
        .unwrap(),
        Regex::new(r"(?i)(?:Date|Dated|Reported(?:\s*On)?|Collected(?:\s*On)?)[:\s]*(\d{4}-\d{2}-\d{2})")
            .unwrap(),
        Regex::new(r"\b(\d{2}[/-]\d{2}[/-]\d{4})\b").unwrap(),
    ]
});

/// Scrape header fields from normalized report text.
pub fn extract_header(text: &str) -> ReportHeader {
    let mut header = ReportHeader::default();

    if let Some(name) = first_capture(&LAB_NAME_PATTERNS, text) {
        header.lab_name = name;
    }
    if let Some(name) = first_capture(&DOCTOR_PATTERNS, text) {
        header.doctor_name = format!("Dr. {name}");
    }
    if let Some(name) = first_capture(&PATIENT_PATTERNS, text) {
        header.patient_name = name;
    }
    if let Some(raw) = first_capture(&DATE_PATTERNS, text) {
        header.report_date = normalize_date(&raw);
    }

    debug!(
        lab = %header.lab_name,
        doctor = %header.doctor_name,
        "extracted report header"
    );
    header
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            if let Some(m) = caps.get(1) {
                let value = m.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Render a scraped date as ISO `YYYY-MM-DD`. Tries ISO first, then
/// day-first, then month-first forms; an unparseable capture is kept as-is
/// rather than dropped to the sentinel.
fn normalize_date(raw: &str) -> String {
    const FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"];
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}
