//! Password analyzer panel state.

use std::time::Instant;

use secrecy::SecretString;
use thiserror::Error;

use crate::api::{ApiError, PasswordEvaluation};
use crate::input::{SecureTextBuffer, TextEditing};

use super::panel::{PanelStatus, Settlement, Ticket};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a password to analyze")]
    EmptyPassword,
}

#[derive(Debug, Default)]
pub struct AnalyzerPanel {
    pub password: SecureTextBuffer,
    pub reveal: bool,
    pub status: PanelStatus,
    pub result: Option<PasswordEvaluation>,
    /// When the current result arrived; drives the meter fill animation.
    pub result_at: Option<Instant>,
    latest: Option<Ticket>,
}

impl AnalyzerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    /// Starts a request. Blank input is rejected without touching state.
    pub fn begin(&mut self, ticket: Ticket) -> Result<SecretString, ValidationError> {
        if self.password.is_blank() {
            return Err(ValidationError::EmptyPassword);
        }
        self.status = PanelStatus::Loading;
        self.latest = Some(ticket);
        Ok(SecretString::from(self.password.content().to_owned()))
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<PasswordEvaluation, ApiError>, now: Instant) -> Settlement {
        if self.latest != Some(ticket) {
            return Settlement::Stale;
        }

        match result {
            Ok(evaluation) => {
                self.result = Some(evaluation);
                self.result_at = Some(now);
                self.status = PanelStatus::Success;
                Settlement::Succeeded
            }
            Err(err) => {
                self.result = None;
                self.result_at = None;
                self.status = PanelStatus::Error;
                Settlement::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClassifierProbabilities;
    use secrecy::ExposeSecret;

    fn evaluation(strength: &str) -> PasswordEvaluation {
        PasswordEvaluation {
            strength: strength.to_string(),
            classifier_probabilities: ClassifierProbabilities { weak: 0.1, medium: 0.2, strong: 0.7 },
            leak_risk: None,
            anomaly_detection: None,
            feedback: Vec::new(),
        }
    }

    fn panel_with(text: &str) -> AnalyzerPanel {
        let mut panel = AnalyzerPanel::new();
        panel.password.set_content(text);
        panel
    }

    #[test]
    fn test_blank_input_rejected() {
        for input in ["", " ", "\t  \n"] {
            let mut panel = panel_with(input);
            assert_eq!(panel.begin(Ticket(1)).unwrap_err(), ValidationError::EmptyPassword);
            assert_eq!(panel.status, PanelStatus::Idle);
        }
    }

    #[test]
    fn test_begin_sends_raw_password() {
        let mut panel = panel_with(" pa ss ");
        let secret = panel.begin(Ticket(1)).unwrap();
        assert_eq!(secret.expose_secret(), " pa ss ");
        assert!(panel.status.is_loading());
    }

    #[test]
    fn test_success_replaces_result() {
        let mut panel = panel_with("first");
        let now = Instant::now();

        panel.begin(Ticket(1)).unwrap();
        assert_eq!(panel.apply(Ticket(1), Ok(evaluation("weak")), now), Settlement::Succeeded);

        panel.begin(Ticket(2)).unwrap();
        panel.apply(Ticket(2), Ok(evaluation("strong")), now);
        assert_eq!(panel.result.as_ref().unwrap().strength, "strong");
        assert_eq!(panel.status, PanelStatus::Success);
    }

    #[test]
    fn test_failure_clears_result() {
        let mut panel = panel_with("secret");
        let now = Instant::now();

        panel.begin(Ticket(1)).unwrap();
        panel.apply(Ticket(1), Ok(evaluation("medium")), now);

        panel.begin(Ticket(2)).unwrap();
        let settled = panel.apply(Ticket(2), Err(ApiError::shape("missing `strength`")), now);

        assert_eq!(settled, Settlement::Failed("Invalid response format from server".into()));
        assert!(panel.result.is_none());
        assert_eq!(panel.status, PanelStatus::Error);
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut panel = panel_with("secret");
        let now = Instant::now();

        panel.begin(Ticket(1)).unwrap();
        panel.begin(Ticket(2)).unwrap();

        assert_eq!(panel.apply(Ticket(1), Ok(evaluation("weak")), now), Settlement::Stale);
        assert!(panel.result.is_none());
        assert!(panel.status.is_loading());

        panel.apply(Ticket(2), Ok(evaluation("strong")), now);
        assert_eq!(panel.result.as_ref().unwrap().strength, "strong");
    }
}
