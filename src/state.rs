use std::time::Duration;

/// Runtime configuration, environment-driven with defaults that work
/// against a local bridge instance.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: String,
    pub default_season: u32,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("GRIDSTATS_API_BASE")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
            default_season: std::env::var("GRIDSTATS_SEASON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2025),
            cache_ttl: Duration::from_secs(
                std::env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(300),
            ),
            http_timeout: Duration::from_secs(
                std::env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000/api".to_string(),
            default_season: 2025,
            cache_ttl: Duration::from_secs(300),
            http_timeout: Duration::from_secs(15),
        }
    }
}

/// Single owner of the selected season. Every query goes through this value;
/// nothing else in the crate holds season state.
#[derive(Debug)]
pub struct SeasonContext {
    season: u32,
}

impl SeasonContext {
    pub fn new(season: u32) -> Self {
        Self { season }
    }

    pub fn current(&self) -> u32 {
        self.season
    }

    pub fn select(&mut self, season: u32) {
        self.season = season;
    }
}
