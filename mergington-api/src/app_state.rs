use std::{collections::BTreeMap, sync::Arc};

use activities::{Activity, ActivityRegistry, RegistryError};
use tokio::sync::RwLock;

/// Shared handle to the activity registry. Mutations go through the write
/// lock so rosters stay duplicate-free under concurrent requests.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<ActivityRegistry>>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    pub async fn activities(&self) -> BTreeMap<String, Activity> {
        self.registry.read().await.list().clone()
    }

    pub async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        self.registry.write().await.signup(activity_name, email)
    }

    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        self.registry.write().await.unregister(activity_name, email)
    }
}
