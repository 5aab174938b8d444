//! Static extraction configuration: one `LabTestSpec` per recognized test.
//!
//! The extractor is a thin interpreter over this table. Per test, patterns
//! are ordered most specific/standard first and most OCR-tolerant last; the
//! first pattern that yields a sane value wins and sets the confidence tier.
//! Compiled once behind `LazyLock`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::TestCategory;

pub struct LabTestSpec {
    /// Test identifier as it appears in results, e.g. `"WBC COUNT"`.
    pub name: &'static str,
    /// Ordered extraction patterns. Group 1 captures the numeral.
    pub patterns: Vec<Regex>,
    pub unit: &'static str,
    /// Clinically normal interval `(lo, hi)`.
    pub reference: (f64, f64),
    /// Absolute plausibility bounds; values outside are rejected as noise.
    pub sanity: (f64, f64),
    /// Pre-rendered reference range for display.
    pub range_display: &'static str,
    pub category: TestCategory,
}

fn re(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

pub static LAB_SPECS: LazyLock<Vec<LabTestSpec>> = LazyLock::new(|| {
    vec![
        LabTestSpec {
            name: "HEMOGLOBIN",
            patterns: vec![
                // Standard: name, value, unit
                re(r"(?:HEMOGLOBIN|HAEMOGLOBIN|HB|Hgb)[:\s]*(\d+\.?\d*)\s*(?:g/?d?[lL]|mg/?d?[lL])"),
                // Known OCR corruptions of the name, unit still present
                re(r"(?:HE[MH][O0]GL[O0]BI?N?|HEH[O0]GL[O0]BI?N?|HEHOGLOBI|HemcJ)[:\s]*(\d+\.?\d*)\s*(?:g/?d?[lL]|mg/?d?[lL])"),
                // Very permissive name shape, any plausible unit
                re(r"(?:H[EI][MH][O0]?G?L?[O0]?B?I?N?)[:\s]*(\d+\.?\d*)\s*(?:[gmf]/?d?[lL])"),
                // Heavier corruption, no unit required
                re(r"(?:HE[MNH][O0M][G6]L[O0][BG]I?N?)[:\s]*(\d+\.?\d*)"),
                // Any number somewhere after the name
                re(r"HEMOGLOBIN.*?(\d+\.?\d*)"),
                re(r"(?:HemcJ|HEMOGLOBIN).*?(\d{2,3}\.?\d*)"),
                // Bare 3-digit runs after the name (decimal point lost)
                re(r"(?:HEMOGLOBIN|HemcJ).*?(\d{3})"),
            ],
            unit: "g/dL",
            reference: (12.0, 15.5),
            sanity: (3.0, 25.0),
            range_display: "12.0-15.5 g/dL",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "WBC COUNT",
            patterns: vec![
                re(r"(?:WBC\s*COUNT|WHITE\s*BLOOD\s*CELL|WBC)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0][³3]?/?[μuµ]?[lL]?"),
                re(r"(?:W[DB]C?\s*C[O0]UNT|W[DB]C?\s*C[O0]UN7|WOC\s*counil)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0][³3]?/?[μuµ]?[lL]?"),
                re(r"(?:W[BD][C6]\s*[C6][O0]U?N?T?)[:\s]*(\d+\.?\d*)"),
                re(r"(?:W[BD][C6]|WOC)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0]"),
                // Corrupted range like "4OdO" preserved mid-number
                re(r"(?:WBC|WOC).*?(\d+[O0]d[O0])"),
                // Raw per-cumm counts in WBC context
                re(r"(?:WBC\s*COUNT|WOC\s*counil).*?(\d{4,5})"),
            ],
            unit: "×10³/μL",
            reference: (4.0, 11.0),
            sanity: (0.1, 50.0),
            range_display: "4.0-11.0 ×10³/μL",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "RBC COUNT",
            patterns: vec![
                re(r"(?:RBC\s*COUNT|RED\s*BLOOD\s*CELL|RBC)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0][⁶6]?/?[μuµ]?[lL]?"),
                re(r"(?:R[DB]C?\s*C[O0]UNT|R[DB]C?\s*C[O0]UN7)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0][⁶6]?/?[μuµ]?[lL]?"),
                re(r"(?:R[BD][C6]\s*[C6][O0]U?N?T?)[:\s]*(\d+\.?\d*)"),
                re(r"(?:R[BD][C6])[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0]"),
            ],
            unit: "×10⁶/μL",
            reference: (4.2, 5.4),
            sanity: (0.1, 50.0),
            range_display: "4.2-5.4 ×10⁶/μL",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "PLATELET COUNT",
            patterns: vec![
                re(r"(?:PLATELET\s*COUNT|PLT|PLATELETS)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0][³3]?/?[μuµ]?[lL]?"),
                re(r"(?:PLATELET\s*C[O0]UNT|PLATE7ET\s*C[O0]UNT)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0][³3]?/?[μuµ]?[lL]?"),
                re(r"(?:PLATE?LET\s*[C6][O0]U?N?T?)[:\s]*(\d+\.?\d*)"),
                re(r"(?:PLT?)[:\s]*(\d+\.?\d*)\s*[×x]?\s*1[O0]"),
            ],
            unit: "×10³/μL",
            reference: (150.0, 450.0),
            sanity: (10.0, 2000.0),
            range_display: "150-450 ×10³/μL",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "HEMATOCRIT",
            patterns: vec![
                re(r"(?:HEMATOCRIT|HAEMATOCRIT|HCT)[:\s]*(\d+\.?\d*)\s*%?"),
                re(r"(?:HE[MN]AT[O0]CRIT|HEMAT[O0]6RIT)[:\s]*(\d+\.?\d*)\s*%?"),
                re(r"(?:H[EI][MN]AT?[O0]?[C6]?RIT?)[:\s]*(\d+\.?\d*)"),
                re(r"HCT[:\s]*(\d+\.?\d*)"),
            ],
            unit: "%",
            reference: (36.0, 46.0),
            sanity: (10.0, 70.0),
            range_display: "36.0-46.0 %",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "MCH",
            patterns: vec![
                re(r"(?:MCH|MEAN\s*CORPUSCULAR\s*HEMOGLOBIN)[:\s]*(\d+\.?\d*)\s*pg?"),
                re(r"(?:M[C6]H|Vch)[:\s]*(\d+\.?\d*)\s*pg?"),
                re(r"M[C6G]H[:\s]*(\d+\.?\d*)"),
                re(r"\bMCH[:\s]*(\d+\.?\d*)"),
            ],
            unit: "pg",
            reference: (27.0, 32.0),
            sanity: (10.0, 200.0),
            range_display: "27.0-32.0 pg",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "MCHC",
            patterns: vec![
                re(r"(?:MCHC|MEAN\s*CORPUSCULAR\s*HEMOGLOBIN\s*CONCENTRATION)[:\s]*(\d+\.?\d*)\s*(?:g/?d?[lL])"),
                re(r"(?:M[C6]H[C6]|VCHC)[:\s]*(\d+\.?\d*)\s*(?:g/?d?[lL])"),
                re(r"M[C6G]H[C6G][:\s]*(\d+\.?\d*)"),
                re(r"\bMCHC[:\s]*(\d+\.?\d*)"),
            ],
            unit: "g/dL",
            reference: (32.0, 36.0),
            sanity: (10.0, 200.0),
            range_display: "32.0-36.0 g/dL",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "MCV",
            patterns: vec![
                re(r"(?:MCV|MEAN\s*CORPUSCULAR\s*VOLUME)[:\s]*(\d+\.?\d*)\s*f?[lL]?"),
                re(r"(?:M[C6]V|M6V)[:\s]*(\d+\.?\d*)\s*f?[lL]?"),
                re(r"M[C6G][VY][:\s]*(\d+\.?\d*)"),
                re(r"\bMCV[:\s]*(\d+\.?\d*)"),
            ],
            unit: "fL",
            reference: (80.0, 100.0),
            sanity: (10.0, 200.0),
            range_display: "80.0-100.0 fL",
            category: TestCategory::Cbc,
        },
        LabTestSpec {
            name: "GLUCOSE",
            patterns: vec![
                re(r"(?:GLUCOSE|BLOOD\s*GLUCOSE|FASTING\s*GLUCOSE)[:\s]*(\d+\.?\d*)\s*mg/?d?[lL]"),
                re(r"(?:GL[U\[]C[O0][S5]E|6LUC[O0][S5]E)[:\s]*(\d+\.?\d*)\s*mg/?d?[lL]"),
                re(r"GLU?C?[O0]?[S5]?E[:\s]*(\d+\.?\d*)"),
            ],
            unit: "mg/dL",
            reference: (70.0, 100.0),
            sanity: (30.0, 800.0),
            range_display: "70-100 mg/dL",
            category: TestCategory::Chemistry,
        },
    ]
});

/// Look up a spec by test identifier.
pub fn spec_for(name: &str) -> Option<&'static LabTestSpec> {
    LAB_SPECS.iter().find(|s| s.name == name)
}
