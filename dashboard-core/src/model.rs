use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Temperature unit preference stored in a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// Wind speed unit preference stored in a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    Kmh,
    Knots,
    Ms,
}

/// A user's saved dashboard preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub is_authenticated: bool,
    pub temp_unit: TemperatureUnit,
    pub wind_unit: WindUnit,
    pub default_location: String,
}

/// Credentials for the legacy direct login exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub name: String,
}

/// Session outcome of a legacy credential login.
///
/// `session_id` is only meaningful when `success` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: String,
    pub name: String,
    pub session_id: String,
}

/// How a login should be performed, decided explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMethod {
    /// Direct credential POST against the proprietary /login endpoint.
    LegacyCredentials(LoginRequest),
    /// OIDC-style delegated sign-on: ask the backend for the identity
    /// provider URL and hand navigation back to the caller.
    DelegatedSignOn,
}

impl LoginMethod {
    /// Select a login method the way the old dashboard frontend did:
    /// the explicit legacy flag wins, otherwise a payload that already
    /// carries both a user id and a display name is treated as legacy
    /// credentials, and anything else goes through delegated sign-on.
    pub fn from_request(request: LoginRequest, use_legacy: bool) -> Self {
        if use_legacy || (!request.user_id.is_empty() && !request.name.is_empty()) {
            LoginMethod::LegacyCredentials(request)
        } else {
            LoginMethod::DelegatedSignOn
        }
    }
}

/// Result of a login attempt.
///
/// The delegated path never yields a session directly; the identity
/// provider sends the user back into the application by a later,
/// separate navigation. The client only reports where to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Session(LoginResponse),
    RedirectTo(String),
}

/// Body of GET /auth/login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime_epoch: i64,
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub last_updated_epoch: i64,
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: u8,
    pub condition: WeatherCondition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
}

/// Current conditions for a resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: CurrentWeather,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub maxwind_mph: f64,
    pub maxwind_kph: f64,
    pub totalprecip_mm: f64,
    pub totalprecip_in: f64,
    pub avghumidity: f64,
    pub daily_will_it_rain: u8,
    pub daily_chance_of_rain: u8,
    pub uv: f64,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHour {
    pub time_epoch: i64,
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: u8,
    pub condition: WeatherCondition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_dir: String,
    pub humidity: u8,
    pub cloud: u8,
    pub precip_mm: f64,
    pub chance_of_rain: u8,
}

/// One calendar day of forecast data; hours are present only when the
/// request asked for them, ordered by time ascending when they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDaily {
    pub date: NaiveDate,
    pub date_epoch: i64,
    pub day: ForecastDay,
    pub astro: Astronomy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<Vec<ForecastHour>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Ordered by calendar date ascending.
    pub forecastday: Vec<ForecastDaily>,
}

/// Multi-day forecast for a resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub forecast: Forecast,
}

/// Query parameters for GET /weather/forecast.
///
/// `days` is passed through as-is; any bound on it is server-defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub location: String,
    pub days: u32,
    pub include_aqi: bool,
    pub include_alerts: bool,
    pub include_hourly: bool,
}

impl ForecastRequest {
    /// Build a request with all optional flags off.
    pub fn new(location: impl Into<String>, days: u32) -> Self {
        Self {
            location: location.into(),
            days,
            include_aqi: false,
            include_alerts: false,
            include_hourly: false,
        }
    }
}

/// Structured failure payload the backend may attach to any non-2xx
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}
