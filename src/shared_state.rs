use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::extract::FromRef;

use crate::config::Config;
use crate::models::insolation::SiteSnapshot;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Map of site_id to latest sampled insolation
    pub snapshots: Arc<RwLock<HashMap<String, SiteSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&self, snapshot: SiteSnapshot) {
        match self.snapshots.write() {
            Ok(mut map) => {
                map.insert(snapshot.site_id.clone(), snapshot);
            }
            Err(_) => tracing::error!(site = %snapshot.site_id, "snapshot lock poisoned, sample dropped"),
        }
    }

    pub fn get_snapshot(&self, site_id: &str) -> Option<SiteSnapshot> {
        self.snapshots.read().ok().and_then(|map| map.get(site_id).cloned())
    }

    pub fn sampled_count(&self) -> usize {
        self.snapshots.read().map(|map| map.len()).unwrap_or(0)
    }
}

/// Router state. Handlers extract `State<AppState>` and/or `State<Config>`
/// through `FromRef`.
#[derive(Clone)]
pub struct SharedState {
    pub app: AppState,
    pub config: Config,
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> Self {
        shared.app.clone()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Self {
        shared.config.clone()
    }
}
