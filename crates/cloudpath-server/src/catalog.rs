// SPDX-License-Identifier: Apache-2.0

use crate::store::{RecordSource, SourceError};
use cloudpath_model::RecordSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError(pub String);

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for CatalogError {}

impl From<SourceError> for CatalogError {
    fn from(value: SourceError) -> Self {
        Self(value.0)
    }
}

/// One loaded record set with its content digest. Never mutated after load.
#[derive(Debug)]
pub struct Snapshot {
    pub records: Arc<RecordSet>,
    pub digest: String,
}

/// Holds the current record set. Readers clone the `Arc` and release the
/// lock before computing; a reload swaps the whole snapshot.
pub struct Catalog {
    source: Arc<dyn RecordSource>,
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl Catalog {
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>) -> Arc<Self> {
        Arc::new(Self {
            source,
            current: RwLock::new(None),
        })
    }

    pub async fn current(&self) -> Option<Arc<Snapshot>> {
        self.current.read().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Loads a fresh set from the source. On failure the previous set stays live.
    pub async fn reload(&self) -> Result<Arc<Snapshot>, CatalogError> {
        let started = Instant::now();
        let records = self.source.load().await?;
        let digest = records
            .digest()
            .map_err(|e| CatalogError(format!("record set digest failed: {e}")))?;
        let snapshot = Arc::new(Snapshot {
            records: Arc::new(records),
            digest,
        });
        let previous = {
            let mut guard = self.current.write().await;
            guard.replace(snapshot.clone())
        };
        let changed = previous.map_or(true, |p| p.digest != snapshot.digest);
        info!(
            source = %self.source.describe(),
            records = snapshot.records.len(),
            digest = %snapshot.digest,
            changed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "record set loaded"
        );
        Ok(snapshot)
    }

    pub fn spawn_reload_loop(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let catalog = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; startup already loaded once.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = catalog.reload().await {
                    if catalog.is_loaded().await {
                        warn!("record set reload failed, keeping previous set: {e}");
                    } else {
                        error!("record set reload failed: {e}");
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StaticRecordSource;

    #[tokio::test]
    async fn catalog_starts_unloaded_and_loads_on_reload() {
        let catalog = Catalog::new(Arc::new(StaticRecordSource::new(RecordSet::empty())));
        assert!(catalog.current().await.is_none());
        let snapshot = catalog.reload().await.expect("reload");
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.digest.len(), 64);
        assert!(catalog.is_loaded().await);
    }
}
