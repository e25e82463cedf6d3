use lungai_predict::io::summary::{format_result, format_user};
use lungai_predict::scores::{PredictionResult, RiskLevel};
use lungai_predict::session::UserInfo;

#[test]
fn result_panel_text() {
    let result = PredictionResult {
        prediction: 1,
        probability: 0.5,
        stage: 2,
        risk_level: RiskLevel::Medium,
        histological_type: "Adenocarcinoma".to_string(),
    };
    let s = format_result(&result);
    assert!(s.starts_with("Prediction Results\n"));
    assert!(s.contains("Medium Risk Level"));
    assert!(s.contains("Status: Positive"));
    assert!(s.contains("Stage: Stage 2"));
    assert!(s.contains("Probability: 50.0% [##########..........]"));
    assert!(s.contains("Follow-up examination recommended."));
}

#[test]
fn user_line() {
    let user = UserInfo {
        id: "3".to_string(),
        name: "Dr. Test".to_string(),
        email: "doc@example.org".to_string(),
    };
    assert_eq!(format_user(&user), "Welcome, Dr. Test <doc@example.org> (id 3)\n");
}
