use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::models::{DateType, PeriodStatistic, ViewType};

pub type CacheKey = (DateType, ViewType);

/// Last good statistics per (date type, view type).
///
/// Every fetch takes a ticket before it starts. A result is only stored if
/// its ticket is newer than the one already stored, so a slow response can
/// never replace data from a request that was issued after it.
pub struct StatisticsCache {
    sequence: AtomicU64,
    slots: RwLock<HashMap<CacheKey, (u64, Arc<Vec<PeriodStatistic>>)>>,
}

impl Default for StatisticsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsCache {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            slots: RwLock::new(HashMap::new()),
        }
    }

    pub fn begin(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store `statistics` fetched under `ticket`. Returns false when a newer
    /// result is already present.
    pub fn store(&self, key: CacheKey, ticket: u64, statistics: Arc<Vec<PeriodStatistic>>) -> bool {
        let Ok(mut slots) = self.slots.write() else {
            return false;
        };
        match slots.get(&key) {
            Some((stored, _)) if *stored > ticket => false,
            _ => {
                slots.insert(key, (ticket, statistics));
                true
            }
        }
    }

    pub fn get(&self, key: CacheKey) -> Option<Arc<Vec<PeriodStatistic>>> {
        let slots = self.slots.read().ok()?;
        slots.get(&key).map(|(_, stats)| Arc::clone(stats))
    }
}
