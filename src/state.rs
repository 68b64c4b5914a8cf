use std::sync::Arc;

use crate::config::Config;
use crate::store::ProjectStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub projects: ProjectStore,
}
