use sigma_config::SigmaConfig;
use sigma_data::DatasetStore;

/// Everything a command handler needs: the resolved config and a store over it.
pub struct AppContext {
    pub config: SigmaConfig,
    pub store: DatasetStore,
}

impl AppContext {
    pub fn new(config: SigmaConfig) -> Self {
        let store = DatasetStore::new(&config.data);
        Self { config, store }
    }
}
