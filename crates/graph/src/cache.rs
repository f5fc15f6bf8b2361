use crate::builder::GraphBuilder;
use crate::types::TransformationGraph;
use crs_catalog::Catalog;
use std::sync::{Arc, Mutex, MutexGuard};

struct CachedGraph {
    version: String,
    graph: Arc<TransformationGraph>,
}

/// Memoizes the transformation graph per catalog version.
///
/// Rebuild and swap happen under one lock, so readers see either the old
/// graph or the new one, never a partially built graph.
#[derive(Default)]
pub struct GraphCache {
    slot: Mutex<Option<CachedGraph>>,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph for this catalog, rebuilt only when its version changed.
    pub fn get_graph(&self, catalog: &Catalog) -> Arc<TransformationGraph> {
        let mut slot = self.lock();

        if let Some(cached) = slot.as_ref() {
            if cached.version == catalog.version() {
                log::debug!("Transformation graph cache hit (version {})", cached.version);
                return Arc::clone(&cached.graph);
            }
            log::debug!(
                "Transformation graph stale (cached {}, catalog {})",
                cached.version,
                catalog.version()
            );
        }

        let graph = Arc::new(GraphBuilder::new().build(catalog.records()));
        *slot = Some(CachedGraph {
            version: catalog.version().to_string(),
            graph: Arc::clone(&graph),
        });
        graph
    }

    /// Drop the cached graph; the next access rebuilds it.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn cached_version(&self) -> Option<String> {
        self.lock().as_ref().map(|cached| cached.version.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Option<CachedGraph>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // The slot is always replaced wholesale, so its contents stay consistent.
                log::warn!("graph cache lock poisoned");
                poisoned.into_inner()
            }
        }
    }
}
