//! Application state for hsi-site

use std::sync::Arc;

use crate::config::Config;
use crate::i18n::MessageCatalog;
use crate::store::StoreClient;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Hosted data store client
    pub store: StoreClient,
    /// Parsed localized message trees
    pub catalog: Arc<MessageCatalog>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl AppState {
    /// Build state from configuration: store client plus message catalog
    pub fn new(config: &Config) -> Result<Self, BoxError> {
        let store = StoreClient::new(&config.store_url, &config.store_anon_key)?;
        let catalog = MessageCatalog::load()?;

        Ok(Self {
            store,
            catalog: Arc::new(catalog),
            environment: config.environment.clone(),
        })
    }
}
