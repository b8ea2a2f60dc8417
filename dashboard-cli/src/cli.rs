use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use dashboard_core::{
    ClientConfig, DashboardApi, ForecastRequest, LoginMethod, LoginOutcome, LoginRequest,
    client_from_config,
    model::{TemperatureUnit, WindUnit},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the dashboard backend URL and credential handling.
    Configure,

    /// Show the saved user profile.
    Profile,

    /// Update fields of the saved user profile.
    SetProfile {
        /// Display name.
        #[arg(long)]
        name: Option<String>,

        /// Temperature unit: "celsius" or "fahrenheit".
        #[arg(long)]
        temp_unit: Option<String>,

        /// Wind unit: "kmh", "knots" or "ms".
        #[arg(long)]
        wind_unit: Option<String>,

        /// Location shown when the dashboard opens.
        #[arg(long)]
        default_location: Option<String>,
    },

    /// Show current weather for a location.
    Current {
        /// Location name, e.g. "Paris".
        location: String,

        /// Include air quality data.
        #[arg(long)]
        aqi: bool,
    },

    /// Show a multi-day forecast for a location.
    Forecast {
        /// Location name, e.g. "Paris".
        location: String,

        /// Number of forecast days.
        #[arg(long, default_value_t = 3)]
        days: u32,

        /// Include air quality data.
        #[arg(long)]
        aqi: bool,

        /// Include weather alerts.
        #[arg(long)]
        alerts: bool,

        /// Include hourly breakdowns.
        #[arg(long)]
        hourly: bool,
    },

    /// Log in, either with legacy credentials or via delegated sign-on.
    Login {
        /// User identifier for the legacy credential flow.
        #[arg(long)]
        user_id: Option<String>,

        /// Display name for the legacy credential flow.
        #[arg(long)]
        name: Option<String>,

        /// Force the legacy credential flow.
        #[arg(long)]
        legacy: bool,
    },

    /// Terminate the current session.
    Logout,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if let Command::Configure = self.command {
            return configure();
        }

        let config = ClientConfig::load()?;
        let client = client_from_config(config)?;

        match self.command {
            Command::Configure => unreachable!("handled above"),
            Command::Profile => {
                let profile = client.get_profile().await?;
                print_profile(&profile);
            }
            Command::SetProfile { name, temp_unit, wind_unit, default_location } => {
                let mut profile = client.get_profile().await?;

                if let Some(name) = name {
                    profile.name = name;
                }
                if let Some(unit) = temp_unit {
                    profile.temp_unit = parse_temp_unit(&unit)?;
                }
                if let Some(unit) = wind_unit {
                    profile.wind_unit = parse_wind_unit(&unit)?;
                }
                if let Some(location) = default_location {
                    profile.default_location = location;
                }

                let updated = client.update_profile(&profile).await?;
                println!("Profile updated.");
                print_profile(&updated);
            }
            Command::Current { location, aqi } => {
                let weather = client.get_current_weather(&location, aqi).await?;

                let updated = chrono::DateTime::from_timestamp(
                    weather.current.last_updated_epoch,
                    0,
                )
                .map_or_else(
                    || weather.current.last_updated.clone(),
                    |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string(),
                );

                println!(
                    "{}, {}: {}",
                    weather.location.name, weather.location.country, weather.current.condition.text
                );
                println!(
                    "  {:.1}°C (feels like {:.1}°C), humidity {}%, wind {:.1} km/h {}",
                    weather.current.temp_c,
                    weather.current.feelslike_c,
                    weather.current.humidity,
                    weather.current.wind_kph,
                    weather.current.wind_dir,
                );
                println!("  Last updated: {updated}");
            }
            Command::Forecast { location, days, aqi, alerts, hourly } => {
                let request = ForecastRequest {
                    location,
                    days,
                    include_aqi: aqi,
                    include_alerts: alerts,
                    include_hourly: hourly,
                };
                let forecast = client.get_forecast(&request).await?;

                println!("{}, {}", forecast.location.name, forecast.location.country);
                for daily in &forecast.forecast.forecastday {
                    println!(
                        "  {}: {}, {:.1}°C to {:.1}°C, rain {}%",
                        daily.date.format("%a %d %b"),
                        daily.day.condition.text,
                        daily.day.mintemp_c,
                        daily.day.maxtemp_c,
                        daily.day.daily_chance_of_rain,
                    );
                    if let Some(hours) = &daily.hour {
                        for hour in hours {
                            println!(
                                "      {}  {:>5.1}°C  {}",
                                hour.time, hour.temp_c, hour.condition.text
                            );
                        }
                    }
                }
            }
            Command::Login { user_id, name, legacy } => {
                let request = LoginRequest {
                    user_id: user_id.unwrap_or_default(),
                    name: name.unwrap_or_default(),
                };

                match client.login(LoginMethod::from_request(request, legacy)).await? {
                    LoginOutcome::Session(session) => {
                        if session.success {
                            println!("Logged in as {} (session {}).", session.name, session.session_id);
                        } else {
                            println!("Login rejected by the backend.");
                        }
                    }
                    LoginOutcome::RedirectTo(url) => {
                        println!("Open this URL in your browser to continue sign-in:");
                        println!("  {url}");
                    }
                }
            }
            Command::Logout => {
                client.logout().await?;
                println!("Logged out.");
            }
        }

        Ok(())
    }
}

fn configure() -> Result<()> {
    let current = ClientConfig::load()?;

    let base_url = inquire::Text::new("Dashboard API base URL:")
        .with_default(&current.base_url)
        .prompt()
        .context("Failed to read base URL")?;

    let attach_credentials = inquire::Confirm::new("Attach session cookies to every request?")
        .with_default(current.attach_credentials)
        .prompt()
        .context("Failed to read credential preference")?;

    let config = ClientConfig { base_url, attach_credentials, ..current };
    config.save()?;

    println!("Saved configuration to {}", ClientConfig::config_file_path()?.display());
    Ok(())
}

fn print_profile(profile: &dashboard_core::UserProfile) {
    println!("{} ({})", profile.name, profile.user_id);
    println!("  Authenticated:    {}", profile.is_authenticated);
    println!("  Temperature unit: {:?}", profile.temp_unit);
    println!("  Wind unit:        {:?}", profile.wind_unit);
    println!("  Default location: {}", profile.default_location);
}

fn parse_temp_unit(value: &str) -> Result<TemperatureUnit> {
    match value.to_lowercase().as_str() {
        "celsius" | "c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(anyhow!(
            "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit."
        )),
    }
}

fn parse_wind_unit(value: &str) -> Result<WindUnit> {
    match value.to_lowercase().as_str() {
        "kmh" => Ok(WindUnit::Kmh),
        "knots" => Ok(WindUnit::Knots),
        "ms" => Ok(WindUnit::Ms),
        _ => Err(anyhow!("Unknown wind unit '{value}'. Supported units: kmh, knots, ms.")),
    }
}
