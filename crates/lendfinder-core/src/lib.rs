pub mod app_config;
pub mod config;
pub mod format;
pub mod hubs;
pub mod leads;
pub mod services;
pub mod states;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_currency, format_number};
pub use hubs::{load_cities, location_page_slug, CityRecord, HubIndex, StateHub};
pub use leads::{LeadError, LeadSubmission};
pub use services::{ServiceCategory, GENERIC_SEARCH_PHRASE, GENERIC_SERVICE_LABEL};
pub use states::{normalize_state_name, state_abbreviation, UsState, US_STATES};
pub use stores::{Coordinates, Store};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read cities file {path}: {source}")]
    CitiesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
