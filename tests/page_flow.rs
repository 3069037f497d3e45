mod support;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use sentinel_pass::api::{ApiClient, ApiError, GeneratePasswordResponse};
use sentinel_pass::app::{
    ApiEvent, App, AppConfig, ClipboardError, ClipboardSink, Dispatch, Dispatcher, GeneratorFocus, OrbState, Panel,
    PanelStatus,
};
use sentinel_pass::input::{InputMode, TextEditing};
use sentinel_pass::ui::MessageType;

use support::respond_once;

#[derive(Clone, Default)]
struct RecordingClipboard {
    copied: Rc<RefCell<Vec<String>>>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn app() -> App {
    App::with_clipboard(AppConfig::default(), Box::new(RecordingClipboard::default()))
}

fn press(app: &mut App, code: KeyCode, now: Instant) -> Option<Dispatch> {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), now)
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), now);
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Server { status: 500, message: message.to_string() }
}

fn suggestions(passwords: &[&str]) -> GeneratePasswordResponse {
    GeneratePasswordResponse {
        status: "success".into(),
        base: String::new(),
        best_password: passwords[0].to_string(),
        suggestions: passwords.iter().map(|p| p.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_analyze_round_trip_through_dispatcher() {
    let (url, _server) = respond_once(
        200,
        r#"{"strength":"weak",
            "classifier_probabilities":{"weak":0.9,"medium":0.08,"strong":0.02},
            "leak_risk":{"score":95,"is_leaked":true,"message":"Found in breach database"},
            "anomaly_detection":{"score":0.1,"is_anomaly":false,"reconstruction_error":0.01},
            "feedback":["Use a passphrase"]}"#,
    )
    .await;

    let client = Arc::new(ApiClient::new(url, None).unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(client, tx);

    let mut app = app();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('a'), now);
    type_text(&mut app, "password123", now);

    let request = press(&mut app, KeyCode::Enter, now).expect("analyze dispatch");
    assert_eq!(app.analyzer.status, PanelStatus::Loading);
    app.tick(now);
    assert_eq!(app.orb.state(), OrbState::Processing);

    dispatcher.dispatch(request);
    let event = rx.recv().await.expect("api event");
    let later = now + Duration::from_millis(300);
    app.apply_api_event(event, later);
    app.tick(later);

    let result = app.analyzer.result.as_ref().expect("evaluation stored");
    assert_eq!(result.strength, "weak");
    assert_eq!(result.leak_risk.as_ref().unwrap().score, 95.0);
    assert_eq!(app.analyzer.status, PanelStatus::Success);
    assert_eq!(app.orb.state(), OrbState::Success);

    app.tick(later + Duration::from_secs(2));
    assert_eq!(app.orb.state(), OrbState::Idle);
}

#[test]
fn test_only_one_panel_visible() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('a'), now);
    press(&mut app, KeyCode::Esc, now);
    press(&mut app, KeyCode::Char('g'), now);

    assert!(app.is_visible(Panel::Generator));
    assert!(!app.is_visible(Panel::Analyzer));
    assert_eq!(app.mode, InputMode::Insert);
}

#[test]
fn test_blank_password_is_rejected_locally() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('a'), now);
    type_text(&mut app, "   ", now);
    assert!(press(&mut app, KeyCode::Enter, now).is_none());

    let note = app.notification.as_ref().unwrap();
    assert_eq!(note.body, "Please enter a password to analyze");
    assert_eq!(note.kind, MessageType::Error);
    assert_eq!(app.analyzer.status, PanelStatus::Idle);
}

#[test]
fn test_failure_clears_previous_evaluation() {
    let mut app = app();
    let now = Instant::now();
    app.analyzer.password.set_content("letmein");

    let Some(Dispatch::Evaluate { ticket, .. }) = app.begin_analyze(now) else {
        panic!("expected evaluate dispatch");
    };
    app.apply_api_event(ApiEvent::Evaluated { ticket, result: Err(server_error("Model not loaded")) }, now);
    app.tick(now);

    assert!(app.analyzer.result.is_none());
    assert_eq!(app.analyzer.status, PanelStatus::Error);
    let note = app.notification.as_ref().unwrap();
    assert_eq!(note.title, "Analysis Failed");
    assert_eq!(note.body, "Model not loaded");
    assert_eq!(app.orb.state(), OrbState::Error);
}

#[test]
fn test_generator_failure_clears_suggestions() {
    let mut app = app();
    let now = Instant::now();

    let Dispatch::Generate { ticket, .. } = app.begin_generate() else {
        panic!("expected generate dispatch");
    };
    app.apply_api_event(ApiEvent::Generated { ticket, result: Ok(suggestions(&["Aa1!", "Bb2@"])) }, now);
    assert_eq!(app.generator.suggestions().len(), 2);
    app.generator.focus = GeneratorFocus::Suggestions;

    let Dispatch::Generate { ticket, .. } = app.begin_generate() else {
        panic!("expected generate dispatch");
    };
    app.apply_api_event(ApiEvent::Generated { ticket, result: Err(server_error("Failed to generate password")) }, now);

    assert!(app.generator.suggestions().is_empty());
    assert_ne!(app.generator.focus, GeneratorFocus::Suggestions);
    assert_eq!(app.notification.as_ref().unwrap().title, "Generation Failed");
}

#[test]
fn test_superseded_response_is_ignored() {
    let mut app = app();
    let now = Instant::now();
    app.analyzer.password.set_content("first");

    let Some(Dispatch::Evaluate { ticket: old, .. }) = app.begin_analyze(now) else {
        panic!("expected evaluate dispatch");
    };
    let Some(Dispatch::Evaluate { ticket: new, .. }) = app.begin_analyze(now) else {
        panic!("expected evaluate dispatch");
    };

    app.apply_api_event(ApiEvent::Evaluated { ticket: new, result: Err(server_error("newer")) }, now);
    app.dismiss_notification();
    app.apply_api_event(ApiEvent::Evaluated { ticket: old, result: Err(server_error("older")) }, now);

    assert!(app.notification.is_none());
    app.tick(now);
    assert_eq!(app.orb.state(), OrbState::Error);
}

#[test]
fn test_copied_markers_expire_independently() {
    let mut app = app();
    let t0 = Instant::now();

    let Dispatch::Generate { ticket, .. } = app.begin_generate() else {
        panic!("expected generate dispatch");
    };
    app.apply_api_event(ApiEvent::Generated { ticket, result: Ok(suggestions(&["Aa1!", "Bb2@"])) }, t0);

    app.copy_selected(t0);
    app.generator.select_next();
    app.copy_selected(t0 + Duration::from_secs(1));

    let t = t0 + Duration::from_millis(2500);
    app.tick(t);
    assert!(!app.generator.is_copied(0, t));
    assert!(app.generator.is_copied(1, t));
}

#[test]
fn test_service_status_follows_health_probe() {
    let mut app = app();
    let now = Instant::now();

    let err = ApiError::Server { status: 503, message: "unavailable".into() };
    app.apply_api_event(ApiEvent::Health(Err(err)), now);
    assert_eq!(app.service, sentinel_pass::app::ServiceStatus::Offline);
    assert!(app.notification.is_none());
}
