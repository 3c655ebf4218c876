use rubi_config::Config;

/// Configuration is fixed at startup; lookups receive their own copy.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
