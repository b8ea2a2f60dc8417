//! Core library for the weather dashboard client.
//!
//! This crate defines:
//! - Transport configuration handling
//! - The typed API client for the dashboard backend
//! - Shared wire models (profiles, weather, forecasts, errors)
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{DashboardApi, DashboardClient, client_from_config};
pub use config::ClientConfig;
pub use error::ApiClientError;
pub use model::{
    ForecastRequest, ForecastResponse, LoginMethod, LoginOutcome, LoginRequest, LoginResponse,
    UserProfile, WeatherResponse,
};
