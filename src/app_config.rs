use config::{Config, ConfigError};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    locations: Locations,
    search: Search,
    geolocation: Option<Geolocation>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("LOCATION_SEARCH").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    /// `None` when no way of locating the user is configured.
    pub fn geolocation(&self) -> Option<&Geolocation> {
        self.geolocation.as_ref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    #[serde(default = "default_log_level", deserialize_with = "deserialize_level")]
    log_level: Level,
}

fn default_log_level() -> Level {
    Level::INFO
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level
        .parse()
        .map_err(|_| Error::custom(format!("invalid log level: '{}', must be one of trace, debug, info, warn or error", level)))
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

#[derive(Debug, Deserialize)]
pub struct Locations {
    url: String,
}

impl Locations {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Search {
    #[serde(with = "humantime_serde", default = "default_debounce")]
    debounce: Duration,
}

fn default_debounce() -> Duration {
    Duration::from_millis(1000)
}

impl Search {
    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum Geolocation {
    Static { latitude: f64, longitude: f64 },
    Http { url: String },
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    event_buffer_size: 8,
                    log_level: Level::DEBUG,
                },
                locations: Locations {
                    url: "https://locations.url/positions".to_string(),
                },
                search: Search {
                    debounce: Duration::from_millis(1000),
                },
                geolocation: Some(Geolocation::Static {
                    latitude: 51.8615899,
                    longitude: 4.3580323,
                }),
            },
        }
    }

    pub fn locations_url(mut self, url: String) -> Self {
        self.config.locations.url = url;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.config.search.debounce = debounce;
        self
    }

    pub fn geolocation(mut self, geolocation: Option<Geolocation>) -> Self {
        self.config.geolocation = geolocation;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
