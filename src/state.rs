use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::modules::genre::repository::GenreRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub genres: Arc<dyn GenreRepository>,
}

impl AppState {
    pub fn new(config: AppConfig, genres: Arc<dyn GenreRepository>) -> Self {
        Self { config, genres }
    }
}
