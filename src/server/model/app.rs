use std::sync::Arc;

use crate::server::{config::Config, data::store::client::StoreClient};

#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
    pub config: Arc<Config>,
}

impl From<(StoreClient, Config)> for AppState {
    fn from((store, config): (StoreClient, Config)) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
