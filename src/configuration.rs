use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_LISTING_URL: &str = "https://www.scseagrant.org/publications-search/";
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.scseagrant.org";
pub const DEFAULT_KEYWORDS: [&str; 8] = [
    "Wetland",
    "Coastal",
    "Resilience",
    "Erosion",
    "Water Quality",
    "Oyster",
    "Flooding",
    "Stormwater",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the publications listing lives and how relative links on it are resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub listing_url: String,
    pub site_origin: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    pub keywords: Vec<String>,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", i64::from(DEFAULT_PORT))?
        .set_default("upstream.listing_url", DEFAULT_LISTING_URL)?
        .set_default("upstream.site_origin", DEFAULT_SITE_ORIGIN)?
        .set_default(
            "upstream.user_agent",
            concat!("seagrant-reports/", env!("CARGO_PKG_VERSION")),
        )?
        .set_default("ui.keywords", DEFAULT_KEYWORDS.to_vec())?
        .add_source(File::with_name("configuration/base").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("application.port", std::env::var("PORT").ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}
