use std::sync::Arc;

use lectern_core::{Authenticator, Config, SanitizedConfig, VideoCatalog};

/// Shared application state
pub struct AppState {
    config: Config,
    authenticator: Arc<dyn Authenticator>,
    catalog: Arc<dyn VideoCatalog>,
}

impl AppState {
    pub fn new(
        config: Config,
        authenticator: Arc<dyn Authenticator>,
        catalog: Arc<dyn VideoCatalog>,
    ) -> Self {
        Self {
            config,
            authenticator,
            catalog,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn catalog(&self) -> &dyn VideoCatalog {
        self.catalog.as_ref()
    }
}
