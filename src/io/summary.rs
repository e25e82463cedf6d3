use crate::scores::PredictionResult;
use crate::scores::classify;
use crate::session::UserInfo;

pub fn format_result(result: &PredictionResult) -> String {
    let mut out = String::new();
    out.push_str("Prediction Results\n");
    out.push_str(&format!("{} Risk Level\n", result.risk_level));
    out.push_str(&format!("Status: {}\n", classify::status_text(result)));
    out.push_str(&format!("Stage: {}\n", classify::stage_text(result)));
    out.push_str(&format!("Histological type: {}\n", result.histological_type));
    out.push_str(&format!(
        "Probability: {} {}\n",
        classify::probability_display(result.probability),
        classify::probability_bar(result.probability)
    ));
    out.push_str(&format!(
        "Recommendation: {}\n",
        result.risk_level.recommendation()
    ));
    out
}

pub fn format_user(user: &UserInfo) -> String {
    format!("Welcome, {} <{}> (id {})\n", user.name, user.email, user.id)
}
