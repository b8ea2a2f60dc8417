use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::ApiClientError,
    model::{
        ErrorResponse, ForecastRequest, ForecastResponse, LoginMethod, LoginOutcome,
        RedirectResponse, UserProfile, WeatherResponse,
    },
};

/// Operations exposed by the weather dashboard backend.
///
/// Each method issues exactly one HTTP request and either returns a fully
/// typed value or fails; there is no retry, caching, or partial result at
/// this layer.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetch the current user's saved preferences.
    async fn get_profile(&self) -> Result<UserProfile, ApiClientError>;

    /// Replace the current user's preferences and return the stored value.
    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiClientError>;

    /// Current conditions for a location.
    async fn get_current_weather(
        &self,
        location: &str,
        include_aqi: bool,
    ) -> Result<WeatherResponse, ApiClientError>;

    /// Multi-day forecast for a location.
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ApiClientError>;

    /// Authenticate, either by legacy credentials or delegated sign-on.
    async fn login(&self, method: LoginMethod) -> Result<LoginOutcome, ApiClientError>;

    /// Terminate the current session.
    async fn logout(&self) -> Result<(), ApiClientError>;
}

/// HTTP implementation of [`DashboardApi`].
///
/// The transport (base URL, timeout, default headers, cookie handling) is
/// fixed at construction; concurrent calls share it read-only.
#[derive(Debug)]
pub struct DashboardClient {
    http: Client,
    config: ClientConfig,
}

impl DashboardClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers);

        if config.attach_credentials {
            // Session continuity: the backend sets a session cookie after
            // login and expects it on every later request.
            builder = builder.cookie_store(true);
        }

        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// Create a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, ApiClientError> {
        Self::new(ClientConfig::default())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// The single error interception point every normalized method goes
    /// through. On a non-2xx status, a body matching the structured
    /// `{error:{code,message,details?}}` shape replaces the transport
    /// error; anything else propagates the original status error.
    async fn check_status(res: Response) -> Result<Response, ApiClientError> {
        if res.status().is_success() {
            return Ok(res);
        }

        let Some(status_err) = res.error_for_status_ref().err() else {
            return Ok(res);
        };

        let body = res.text().await.unwrap_or_default();
        if let Ok(ErrorResponse { error }) = serde_json::from_str(&body) {
            return Err(ApiClientError::Api {
                code: error.code,
                message: error.message,
                details: error.details,
            });
        }

        Err(status_err.into())
    }

    async fn unwrap_body<T: DeserializeOwned>(res: Response) -> Result<T, ApiClientError> {
        let res = Self::check_status(res).await?;
        Ok(res.json::<T>().await?)
    }
}

const fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn get_profile(&self) -> Result<UserProfile, ApiClientError> {
        let url = self.url("/profile");
        debug!(url = %url, "Fetching user profile");

        let res = self.http.get(&url).send().await?;
        Self::unwrap_body(res).await
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiClientError> {
        let url = self.url("/profile");
        debug!(url = %url, user_id = %profile.user_id, "Updating user profile");

        let res = self.http.put(&url).json(profile).send().await?;
        Self::unwrap_body(res).await
    }

    async fn get_current_weather(
        &self,
        location: &str,
        include_aqi: bool,
    ) -> Result<WeatherResponse, ApiClientError> {
        let url = self.url("/weather/current");
        debug!(url = %url, location = %location, "Fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("location", location), ("include_aqi", bool_param(include_aqi))])
            .send()
            .await?;

        Self::unwrap_body(res).await
    }

    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ApiClientError> {
        let url = self.url("/weather/forecast");
        debug!(url = %url, location = %request.location, days = request.days, "Fetching forecast");

        let days = request.days.to_string();
        let params = [
            ("location", request.location.as_str()),
            ("days", days.as_str()),
            ("include_aqi", bool_param(request.include_aqi)),
            ("include_alerts", bool_param(request.include_alerts)),
            ("include_hourly", bool_param(request.include_hourly)),
        ];

        let res = self.http.get(&url).query(&params).send().await?;
        Self::unwrap_body(res).await
    }

    async fn login(&self, method: LoginMethod) -> Result<LoginOutcome, ApiClientError> {
        match method {
            LoginMethod::LegacyCredentials(request) => {
                let url = self.url("/login");
                debug!(url = %url, user_id = %request.user_id, "Legacy credential login");

                let res = self.http.post(&url).json(&request).send().await?;
                let response = Self::unwrap_body(res).await?;
                Ok(LoginOutcome::Session(response))
            }
            LoginMethod::DelegatedSignOn => {
                // Failures here are not a final login outcome, so they are
                // logged and re-raised raw instead of being normalized.
                let url = self.url("/auth/login");
                debug!(url = %url, "Delegated sign-on");

                let res = match self.http.get(&url).send().await {
                    Ok(res) => res,
                    Err(err) => {
                        warn!(error = %err, "Delegated sign-on request failed");
                        return Err(err.into());
                    }
                };

                let res = match res.error_for_status() {
                    Ok(res) => res,
                    Err(err) => {
                        warn!(error = %err, "Delegated sign-on rejected by backend");
                        return Err(err.into());
                    }
                };

                let body: RedirectResponse = match res.json().await {
                    Ok(body) => body,
                    Err(err) => {
                        warn!(error = %err, "Delegated sign-on returned an unusable body");
                        return Err(err.into());
                    }
                };

                Ok(LoginOutcome::RedirectTo(body.redirect_url))
            }
        }
    }

    async fn logout(&self) -> Result<(), ApiClientError> {
        let url = self.url("/logout");
        debug!(url = %url, "Logging out");

        let res = self.http.post(&url).send().await?;
        Self::check_status(res).await?;
        Ok(())
    }
}

/// Construct a boxed client from config, for call sites that only care
/// about the [`DashboardApi`] surface.
pub fn client_from_config(config: ClientConfig) -> Result<Box<dyn DashboardApi>, ApiClientError> {
    Ok(Box::new(DashboardClient::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let config =
            ClientConfig { base_url: "http://localhost:8080/api".to_string(), ..Default::default() };
        let client = DashboardClient::new(config).expect("client creation should succeed");

        assert_eq!(client.url("/profile"), "http://localhost:8080/api/profile");
    }

    #[test]
    fn url_tolerates_trailing_slash_in_base() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            ..Default::default()
        };
        let client = DashboardClient::new(config).expect("client creation should succeed");

        assert_eq!(client.url("/weather/current"), "http://localhost:8080/api/weather/current");
    }

    #[test]
    fn bool_param_matches_wire_format() {
        assert_eq!(bool_param(true), "true");
        assert_eq!(bool_param(false), "false");
    }

    #[test]
    fn client_creation_with_defaults() {
        assert!(DashboardClient::with_defaults().is_ok());
    }

    #[test]
    fn client_creation_with_credentials() {
        let config = ClientConfig { attach_credentials: true, ..Default::default() };
        assert!(DashboardClient::new(config).is_ok());
    }
}
