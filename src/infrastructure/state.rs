//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::PartyServiceImpl;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::content::ContentStore;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Immutable reference tables, safe for concurrent reads
    pub content: Arc<ContentStore>,
    pub party_service: PartyServiceImpl,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let content = Arc::new(ContentStore::load(&config.data_dir)?);
        let party_service = PartyServiceImpl::new(content.clone());

        Ok(Self {
            config,
            content,
            party_service,
        })
    }
}
