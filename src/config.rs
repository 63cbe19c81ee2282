use crate::error::AppError;
use crate::rate_limit::{DEFAULT_BUDGET, DEFAULT_WINDOW};
use std::env;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Calls allowed per rate window.
    pub budget: u32,
    pub window: Duration,
    /// Optional short-term cap on top of the window (dev keys allow 20/s).
    pub burst_per_second: Option<NonZeroU32>,
    /// Data Dragon locale used for champion data.
    pub locale: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            budget: DEFAULT_BUDGET,
            window: DEFAULT_WINDOW,
            burst_per_second: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
        })?;

        let mut config = Config::new(api_key);

        if let Some(budget) = parse_var::<u32>("RIOT_RATE_BUDGET")? {
            config.budget = budget;
        }
        if let Some(secs) = parse_var::<u64>("RIOT_RATE_WINDOW_SECS")? {
            config.window = Duration::from_secs(secs);
        }
        config.burst_per_second = parse_var::<NonZeroU32>("RIOT_BURST_PER_SECOND")?;
        if let Ok(locale) = env::var("DDRAGON_LOCALE") {
            config.locale = locale;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| {
                AppError::ConfigError(format!("{} is not a valid number: {:?}", name, raw))
            }),
        Err(_) => Ok(None),
    }
}
