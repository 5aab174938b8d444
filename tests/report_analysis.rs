//! End-to-end analysis over realistic report text.

use labsight::{analyze, to_json, Confidence, ReportType, Urgency, ValueStatus};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}

#[test]
fn clean_panel_end_to_end() {
    init_tracing();

    let text = "APEX DIAGNOSTIC CENTER\n\
                Ref. By: Dr. Anil Desai, Reported On: 14/03/2024\n\
                Patient: Meera Sharma, COMPLETE BLOOD COUNT (CBC)\n\
                HEMOGLOBIN: 13.5 g/dL\n\
                WBC COUNT: 7.2\n\
                HEMATOCRIT: 41.0 %\n\
                GLUCOSE: 85 mg/dL";
    let analysis = analyze(text);

    assert_eq!(analysis.report_type, ReportType::Laboratory);
    assert_eq!(analysis.urgency, Urgency::Routine);
    assert_eq!(analysis.header.patient_name, "Meera Sharma");
    assert_eq!(analysis.header.doctor_name, "Dr. Anil Desai");
    assert_eq!(analysis.header.report_date, "2024-03-14");
    assert!(analysis.header.lab_name.contains("APEX DIAGNOSTIC"));

    let tests: Vec<&str> = analysis.lab_values.iter().map(|v| v.test.as_str()).collect();
    assert!(tests.contains(&"HEMOGLOBIN"));
    assert!(tests.contains(&"WBC COUNT"));
    assert!(tests.contains(&"HEMATOCRIT"));
    assert!(tests.contains(&"GLUCOSE"));
    assert!(analysis
        .lab_values
        .iter()
        .all(|v| v.status == ValueStatus::Normal || !v.status.is_abnormal()));
    assert!(analysis.summary.contains("within normal ranges"));

    let json = to_json(&analysis).unwrap();
    assert!(json.contains("\"lab_values\""));
}

#[test]
fn degraded_scan_end_to_end() {
    init_tracing();

    let text = "Dr. LOGY PATH0L0GY LAd O7I2345678\n\
                Patient: Yash Patel, Ref. By: Dr. Hiren Shah,\n\
                Complete BIood CouhT (CBC)\n\
                HemcJ II.2 gldL\n\
                WOC counil 7.5";
    let analysis = analyze(text);

    assert!(analysis.header.lab_name.contains("DRLOGY PATHOLOGY LAB"));
    assert_eq!(analysis.header.patient_name, "Yash Patel");
    assert_eq!(analysis.report_type, ReportType::Laboratory);

    let hb = analysis
        .lab_values
        .iter()
        .find(|v| v.test == "HEMOGLOBIN")
        .expect("hemoglobin recovered from corrupted name and digits");
    assert_eq!(hb.value, 11.2);
    assert_eq!(hb.unit, "g/dL");
    assert_eq!(hb.status, ValueStatus::Low);
    assert_eq!(hb.confidence, Confidence::High);

    let wbc = analysis
        .lab_values
        .iter()
        .find(|v| v.test == "WBC COUNT")
        .expect("wbc recovered from corrupted name");
    assert_eq!(wbc.value, 7.5);

    assert_eq!(analysis.urgency, Urgency::Moderate);
    assert!(analysis
        .detected_conditions
        .iter()
        .any(|c| c.condition == "Possible Anemia"));
}
