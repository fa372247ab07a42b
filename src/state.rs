use std::sync::{Arc, PoisonError, RwLock};

use crate::cache::StatisticsCache;
use crate::models::ChartContext;
use crate::services::client::StatisticsClient;

#[derive(Clone)]
pub struct AppState {
    pub client: StatisticsClient,
    pub cache: Arc<StatisticsCache>,
    /// Account lookup, replaced wholesale when accounts are reloaded.
    pub context: Arc<RwLock<Arc<ChartContext>>>,
}

impl AppState {
    pub fn new(client: StatisticsClient, context: ChartContext) -> Self {
        Self {
            client,
            cache: Arc::new(StatisticsCache::new()),
            context: Arc::new(RwLock::new(Arc::new(context))),
        }
    }

    /// Snapshot of the current account lookup.
    pub fn context(&self) -> Arc<ChartContext> {
        let context = self.context.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&context)
    }

    pub fn replace_context(&self, context: Arc<ChartContext>) {
        *self.context.write().unwrap_or_else(PoisonError::into_inner) = context;
    }
}
