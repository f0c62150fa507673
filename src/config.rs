use std::env;
use chrono_tz::Tz;
use tracing::warn;
use crate::domain::models::schedule::ColorMode;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub sessions_api_url: String,
    pub courses_api_url: String,
    pub api_token: String,
    pub default_timezone: Tz,
    pub color_mode: ColorMode,
}

impl Config {
    pub fn from_env() -> Self {
        let default_timezone = env::var("DEFAULT_TIMEZONE")
            .ok()
            .and_then(|raw| match raw.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    warn!("DEFAULT_TIMEZONE '{}' is not a valid IANA zone, falling back to UTC", raw);
                    None
                }
            })
            .unwrap_or(chrono_tz::UTC);

        let color_mode = env::var("COLOR_MODE")
            .ok()
            .and_then(|raw| raw.parse::<ColorMode>().map_err(|e| warn!("{}", e)).ok())
            .unwrap_or_default();

        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            sessions_api_url: env::var("SESSIONS_API_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string()),
            courses_api_url: env::var("COURSES_API_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string()),
            api_token: env::var("API_TOKEN").unwrap_or_default(),
            default_timezone,
            color_mode,
        }
    }
}
