use std::collections::HashMap;

use async_trait::async_trait;
use rocket::tokio::sync::RwLock;
use shared::UserProgress;

/// Storage seam for per-user progress documents.
///
/// One record per user, replaced wholesale: `save` either lands the full
/// updated document in one durable write or fails without touching the
/// stored state. Any document database can stand behind this trait.
#[async_trait]
pub trait ProgressStore: Send + Sync + 'static {
    async fn load(&self, user_id: &str) -> anyhow::Result<Option<UserProgress>>;

    async fn save(&self, progress: &UserProgress) -> anyhow::Result<()>;
}

/// In-process store backing the default deployment and the test suite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, UserProgress>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn load(&self, user_id: &str) -> anyhow::Result<Option<UserProgress>> {
        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn save(&self, progress: &UserProgress) -> anyhow::Result<()> {
        self.records
            .write()
            .await
            .insert(progress.user_id.clone(), progress.clone());
        Ok(())
    }
}
