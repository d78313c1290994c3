use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_site_name() -> String {
    "Shri Dev Darshan".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// How many days ahead a puja can be booked
    #[serde(default = "default_window_days")]
    pub window_days: u16,
    #[serde(default = "default_minute_step")]
    pub minute_step: u8,
    #[serde(default)]
    pub use_24_hour: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            minute_step: default_minute_step(),
            use_24_hour: false,
        }
    }
}

impl BookingConfig {
    pub fn rules(&self) -> devdarshan_booking::BookingRules {
        devdarshan_booking::BookingRules {
            window_days: self.window_days,
        }
    }

    pub fn clock_mode(&self) -> devdarshan_calendar::ClockMode {
        if self.use_24_hour {
            devdarshan_calendar::ClockMode::TwentyFourHour
        } else {
            devdarshan_calendar::ClockMode::TwelveHour
        }
    }
}

fn default_window_days() -> u16 {
    180
}

fn default_minute_step() -> u8 {
    devdarshan_calendar::clock::DEFAULT_MINUTE_STEP
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DEVDARSHAN__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults and env still apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DEVDARSHAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.site.base_url.trim().is_empty() {
            return Err("Site base_url must not be empty".to_string());
        }
        if self.booking.window_days == 0 {
            return Err("Booking window_days must be at least 1".to_string());
        }
        if !(1..=60).contains(&self.booking.minute_step) {
            return Err("Booking minute_step must be between 1 and 60".to_string());
        }
        Ok(())
    }

    /// Absolute link to a page of the site.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.site.base_url.trim_end_matches('/'))
    }
}
