//! Sentinel Pass
//!
//! Terminal client for the Sentinel Pass password scoring and generation
//! service.

pub mod api;
pub mod app;
pub mod input;
pub mod logging;
pub mod ui;
