use std::sync::Arc;
use soller_core::{Catalog, Config};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
