//! Background request dispatch.
//!
//! The UI loop never awaits the network: each [`Dispatch`] is spawned onto
//! the runtime and its outcome comes back as an [`ApiEvent`] on a channel
//! the loop drains every tick.

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiError, GeneratePasswordResponse, GenerateRequest, HealthStatus, PasswordEvaluation};

use super::panel::Ticket;

#[derive(Debug)]
pub enum Dispatch {
    Evaluate { ticket: Ticket, password: SecretString },
    Generate { ticket: Ticket, request: GenerateRequest },
    Health,
}

#[derive(Debug)]
pub enum ApiEvent {
    Evaluated { ticket: Ticket, result: Result<PasswordEvaluation, ApiError> },
    Generated { ticket: Ticket, result: Result<GeneratePasswordResponse, ApiError> },
    Health(Result<HealthStatus, ApiError>),
}

pub struct Dispatcher {
    client: Arc<ApiClient>,
    events: mpsc::UnboundedSender<ApiEvent>,
}

impl Dispatcher {
    pub fn new(client: Arc<ApiClient>, events: mpsc::UnboundedSender<ApiEvent>) -> Self {
        Self { client, events }
    }

    pub fn dispatch(&self, request: Dispatch) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();

        tokio::spawn(async move {
            let event = run(&client, request).await;
            if events.send(event).is_err() {
                tracing::debug!("event loop gone, dropping response");
            }
        });
    }
}

pub async fn run(client: &ApiClient, request: Dispatch) -> ApiEvent {
    match request {
        Dispatch::Evaluate { ticket, password } => ApiEvent::Evaluated {
            ticket,
            result: client.evaluate_password(&password).await,
        },
        Dispatch::Generate { ticket, request } => ApiEvent::Generated {
            ticket,
            result: client.generate_password(&request).await,
        },
        Dispatch::Health => ApiEvent::Health(client.health().await),
    }
}
