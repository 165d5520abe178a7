use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::store::DynStore;
use crate::store::memory::MemoryStore;

/// Process-wide state: the storage handle and configuration, established
/// once at startup. No other mutable state is shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
