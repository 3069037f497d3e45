//! Wire types for the scoring and generation service.
//!
//! Bodies are decoded into loose `*Body` structs first and then checked
//! into the domain types, so a malformed payload becomes an
//! [`ApiError::Shape`] instead of a half-filled result.

use serde::{Deserialize, Serialize};

use super::client::ApiError;

// ============================================================================
// Evaluation
// ============================================================================

/// Known strength classes. The server value is still rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 3] = [Self::Weak, Self::Medium, Self::Strong];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weak" => Some(Self::Weak),
            "medium" => Some(Self::Medium),
            "strong" => Some(Self::Strong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClassifierProbabilities {
    pub weak: f64,
    pub medium: f64,
    pub strong: f64,
}

impl ClassifierProbabilities {
    pub fn get(&self, level: StrengthLevel) -> f64 {
        match level {
            StrengthLevel::Weak => self.weak,
            StrengthLevel::Medium => self.medium,
            StrengthLevel::Strong => self.strong,
        }
    }
}

/// Severity bucket for a leak risk score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Low,
    Elevated,
    High,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeakRisk {
    pub score: f64,
    #[serde(default)]
    pub is_leaked: bool,
    #[serde(default)]
    pub message: String,
}

impl LeakRisk {
    pub fn alert_level(&self) -> AlertLevel {
        if self.score > 70.0 {
            AlertLevel::High
        } else if self.score > 40.0 {
            AlertLevel::Elevated
        } else {
            AlertLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnomalyDetection {
    pub score: f64,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub reconstruction_error: f64,
}

impl AnomalyDetection {
    pub fn summary(&self) -> &'static str {
        if self.is_anomaly {
            "Unusual pattern detected"
        } else {
            "Normal pattern"
        }
    }
}

/// Result of a successful evaluate call.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub strength: String,
    pub classifier_probabilities: ClassifierProbabilities,
    pub leak_risk: Option<LeakRisk>,
    pub anomaly_detection: Option<AnomalyDetection>,
    pub feedback: Vec<String>,
}

impl PasswordEvaluation {
    pub fn level(&self) -> Option<StrengthLevel> {
        StrengthLevel::parse(&self.strength)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationBody {
    strength: Option<String>,
    classifier_probabilities: Option<ClassifierProbabilities>,
    leak_risk: Option<LeakRisk>,
    anomaly_detection: Option<AnomalyDetection>,
    #[serde(default)]
    feedback: Vec<String>,
}

impl TryFrom<EvaluationBody> for PasswordEvaluation {
    type Error = ApiError;

    fn try_from(body: EvaluationBody) -> Result<Self, Self::Error> {
        let strength = body
            .strength
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::shape("missing `strength`"))?;
        let classifier_probabilities = body
            .classifier_probabilities
            .ok_or_else(|| ApiError::shape("missing `classifier_probabilities`"))?;

        Ok(Self {
            strength,
            classifier_probabilities,
            leak_risk: body.leak_risk,
            anomaly_detection: body.anomaly_detection,
            feedback: body.feedback,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateRequest<'a> {
    pub password: &'a str,
}

// ============================================================================
// Generation
// ============================================================================

/// Generation strategy sent as `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityProfile {
    #[default]
    Balanced,
    Memorable,
    HackerProof,
}

impl SecurityProfile {
    pub const ALL: [SecurityProfile; 3] = [Self::Balanced, Self::Memorable, Self::HackerProof];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Memorable => "memorable",
            Self::HackerProof => "hacker-proof",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Memorable => "Memorable",
            Self::HackerProof => "Maximum Security",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Balanced => "Optimal security and usability",
            Self::Memorable => "Enhanced memorability",
            Self::HackerProof => "Highest security level",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Balanced => Self::Memorable,
            Self::Memorable => Self::HackerProof,
            Self::HackerProof => Self::Balanced,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Balanced => Self::HackerProof,
            Self::Memorable => Self::Balanced,
            Self::HackerProof => Self::Memorable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub mode: SecurityProfile,
}

impl GenerateRequest {
    /// Blank base phrases are left out of the request entirely.
    pub fn new(base: &str, mode: SecurityProfile) -> Self {
        let base = base.trim();
        Self {
            base: (!base.is_empty()).then(|| base.to_string()),
            mode,
        }
    }
}

/// The one generate contract the rest of the crate sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePasswordResponse {
    pub status: String,
    pub base: String,
    pub best_password: String,
    pub suggestions: Vec<String>,
}

impl GeneratePasswordResponse {
    pub fn is_best(&self, index: usize) -> bool {
        self.suggestions.get(index).is_some_and(|s| *s == self.best_password)
    }
}

/// Both bodies the service has been seen to return. The legacy
/// `{passwords}` form is folded into the canonical response here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GenerateBody {
    Canonical {
        #[serde(default)]
        status: String,
        #[serde(default)]
        base: String,
        #[serde(default)]
        best_password: String,
        suggestions: Vec<String>,
    },
    Legacy {
        passwords: Vec<String>,
    },
}

const LEGACY_ERROR_PREFIX: &str = "Error:";

impl GenerateBody {
    pub(crate) fn into_response(self, request: &GenerateRequest) -> Result<GeneratePasswordResponse, ApiError> {
        let requested_base = request.base.clone().unwrap_or_default();

        let (status, base, best, mut suggestions) = match self {
            Self::Canonical { status, base, best_password, suggestions } => {
                let base = if base.is_empty() { requested_base } else { base };
                (status, base, best_password, suggestions)
            }
            Self::Legacy { passwords } => {
                if let [only] = passwords.as_slice() {
                    if let Some(reason) = only.strip_prefix(LEGACY_ERROR_PREFIX) {
                        return Err(ApiError::Server { status: 200, message: reason.trim().to_string() });
                    }
                }
                ("success".to_string(), requested_base, String::new(), passwords)
            }
        };

        suggestions.retain(|s| !s.is_empty());
        let Some(first) = suggestions.first() else {
            return Err(ApiError::shape("no passwords returned"));
        };
        let best_password = if best.is_empty() { first.clone() } else { best };
        if !suggestions.contains(&best_password) {
            suggestions.insert(0, best_password.clone());
        }

        Ok(GeneratePasswordResponse {
            status: if status.is_empty() { "success".to_string() } else { status },
            base,
            best_password,
            suggestions,
        })
    }
}

// ============================================================================
// Health / errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Items(Vec<ErrorItem>),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    msg: Option<String>,
}

/// Pulls the `detail` message out of an error body, if there is a usable one.
pub(crate) fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.detail? {
        ErrorDetail::Text(text) => text,
        ErrorDetail::Items(items) => items
            .into_iter()
            .filter_map(|item| item.msg)
            .collect::<Vec<_>>()
            .join("; "),
        ErrorDetail::Other(_) => return None,
    };
    let message = message.trim().to_string();
    (!message.is_empty()).then_some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(json: &str) -> Result<PasswordEvaluation, ApiError> {
        let body: EvaluationBody = serde_json::from_str(json).unwrap();
        PasswordEvaluation::try_from(body)
    }

    #[test]
    fn test_full_evaluation_decodes() {
        let eval = evaluation(
            r#"{"strength":"weak",
                "classifier_probabilities":{"weak":0.9,"medium":0.08,"strong":0.02},
                "leak_risk":{"score":95,"is_leaked":true,"message":"Found in breach database"},
                "anomaly_detection":{"score":0.1,"is_anomaly":false,"reconstruction_error":0.01},
                "feedback":["Add uppercase letters"]}"#,
        )
        .unwrap();

        assert_eq!(eval.strength, "weak");
        assert_eq!(eval.level(), Some(StrengthLevel::Weak));
        assert_eq!(eval.classifier_probabilities.get(StrengthLevel::Weak), 0.9);
        assert_eq!(eval.leak_risk.as_ref().unwrap().alert_level(), AlertLevel::High);
        assert_eq!(eval.feedback.len(), 1);
    }

    #[test]
    fn test_missing_strength_is_shape_error() {
        let err = evaluation(r#"{"classifier_probabilities":{"weak":1,"medium":0,"strong":0}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Shape { .. }));
        assert_eq!(err.to_string(), "Invalid response format from server");
    }

    #[test]
    fn test_empty_strength_is_shape_error() {
        let err = evaluation(r#"{"strength":"","classifier_probabilities":{"weak":1,"medium":0,"strong":0}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Shape { .. }));
    }

    #[test]
    fn test_missing_probabilities_is_shape_error() {
        let err = evaluation(r#"{"strength":"strong","feedback":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Shape { .. }));
    }

    #[test]
    fn test_unknown_strength_kept_verbatim() {
        let eval = evaluation(r#"{"strength":"Very Strong","classifier_probabilities":{"weak":0,"medium":0,"strong":1}}"#).unwrap();
        assert_eq!(eval.strength, "Very Strong");
        assert_eq!(eval.level(), None);
        assert!(eval.leak_risk.is_none());
    }

    #[test]
    fn test_alert_level_thresholds() {
        let risk = |score| LeakRisk { score, is_leaked: false, message: String::new() };
        assert_eq!(risk(70.0).alert_level(), AlertLevel::Elevated);
        assert_eq!(risk(70.5).alert_level(), AlertLevel::High);
        assert_eq!(risk(40.0).alert_level(), AlertLevel::Low);
        assert_eq!(risk(41.0).alert_level(), AlertLevel::Elevated);
    }

    #[test]
    fn test_generate_request_omits_blank_base() {
        let req = GenerateRequest::new("   ", SecurityProfile::HackerProof);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"mode":"hacker-proof"}"#);

        let req = GenerateRequest::new(" tiger ", SecurityProfile::Memorable);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"base":"tiger","mode":"memorable"}"#);
    }

    #[test]
    fn test_profile_cycles() {
        let mut profile = SecurityProfile::default();
        for _ in 0..3 {
            profile = profile.next();
        }
        assert_eq!(profile, SecurityProfile::Balanced);
        assert_eq!(SecurityProfile::Balanced.prev(), SecurityProfile::HackerProof);
    }

    #[test]
    fn test_canonical_generate_body() {
        let req = GenerateRequest::new("tiger", SecurityProfile::Balanced);
        let body: GenerateBody = serde_json::from_str(
            r#"{"status":"ok","base":"tiger","best_password":"T1g3r!42","suggestions":["T1g3r!42","t!GER77"]}"#,
        )
        .unwrap();
        let resp = body.into_response(&req).unwrap();
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.best_password, "T1g3r!42");
        assert_eq!(resp.suggestions.len(), 2);
        assert!(resp.is_best(0));
        assert!(!resp.is_best(1));
    }

    #[test]
    fn test_legacy_generate_body_is_normalized() {
        let req = GenerateRequest::new("moon", SecurityProfile::Balanced);
        let body: GenerateBody = serde_json::from_str(r#"{"passwords":["M00n#12","Q4m0on55"]}"#).unwrap();
        let resp = body.into_response(&req).unwrap();
        assert_eq!(resp.status, "success");
        assert_eq!(resp.base, "moon");
        assert_eq!(resp.best_password, "M00n#12");
        assert_eq!(resp.suggestions, vec!["M00n#12", "Q4m0on55"]);
    }

    #[test]
    fn test_legacy_error_entry_is_server_error() {
        let req = GenerateRequest::new("", SecurityProfile::Balanced);
        let body: GenerateBody = serde_json::from_str(r#"{"passwords":["Error: model offline"]}"#).unwrap();
        let err = body.into_response(&req).unwrap_err();
        assert_eq!(err.to_string(), "model offline");
    }

    #[test]
    fn test_empty_generate_body_is_shape_error() {
        let req = GenerateRequest::new("", SecurityProfile::Balanced);
        let body: GenerateBody = serde_json::from_str(r#"{"passwords":[]}"#).unwrap();
        assert!(matches!(body.into_response(&req), Err(ApiError::Shape { .. })));
    }

    #[test]
    fn test_best_password_prepended_when_missing() {
        let req = GenerateRequest::new("", SecurityProfile::Balanced);
        let body: GenerateBody =
            serde_json::from_str(r#"{"status":"ok","base":"","best_password":"Zz9!","suggestions":["a1!B"]}"#).unwrap();
        let resp = body.into_response(&req).unwrap();
        assert_eq!(resp.suggestions, vec!["Zz9!", "a1!B"]);
    }

    #[test]
    fn test_detail_message_variants() {
        assert_eq!(detail_message(r#"{"detail":"Model not loaded"}"#).as_deref(), Some("Model not loaded"));
        assert_eq!(
            detail_message(r#"{"detail":[{"msg":"field required"},{"msg":"str type expected"}]}"#).as_deref(),
            Some("field required; str type expected")
        );
        assert_eq!(detail_message(r#"{"detail":""}"#), None);
        assert_eq!(detail_message(r#"{"detail":{"code":3}}"#), None);
        assert_eq!(detail_message("<html>bad gateway</html>"), None);
    }
}
