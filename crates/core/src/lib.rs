pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod metrics;
pub mod query;
pub mod testing;

pub use auth::{
    create_authenticator, AuthError, AuthRequest, Authenticator, Identity, NoneAuthenticator,
    Role, StaticTokenAuthenticator,
};
pub use catalog::{CatalogError, NewVideo, SqliteCatalog, VideoCatalog, VideoRecord};
pub use client::{CatalogBrowser, CatalogClient, ClientError, DEBOUNCE_INTERVAL};
pub use config::{
    load_config, load_config_from_str, validate_config, AuthConfig, AuthMethod, Config,
    ConfigError, DatabaseConfig, SanitizedConfig, ServerConfig, TokenEntry,
};
pub use query::{category_options, summarize, CatalogQuery, CatalogSummary, SortKey};
