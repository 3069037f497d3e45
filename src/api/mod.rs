//! API Module
//!
//! Typed access to the remote scoring/generation service.

pub mod client;
pub mod types;

// Re-exports
pub use client::{ApiClient, ApiError, Operation};
pub use types::{
    AlertLevel, AnomalyDetection, ClassifierProbabilities, GeneratePasswordResponse, GenerateRequest, HealthStatus,
    LeakRisk, PasswordEvaluation, SecurityProfile, StrengthLevel,
};
