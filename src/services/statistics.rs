use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{ChartContext, DateType, PeriodStatistic, ViewType};
use crate::state::AppState;

/// Statistics for one view, and whether they come from an earlier fetch.
#[derive(Debug, Clone)]
pub struct LoadedStatistics {
    pub statistics: Arc<Vec<PeriodStatistic>>,
    pub stale: bool,
}

/// Fetch fresh statistics, falling back to the last good copy on failure.
///
/// When an out-of-order response loses against a newer one, the newer cached
/// list is returned instead.
pub async fn load_statistics(
    state: &AppState,
    date_type: DateType,
    view_type: ViewType,
) -> AppResult<LoadedStatistics> {
    let key = (date_type, view_type);
    let ticket = state.cache.begin();

    match state.client.fetch_statistics(date_type, view_type).await {
        Ok(fresh) => {
            let fresh = Arc::new(fresh);
            if state.cache.store(key, ticket, Arc::clone(&fresh)) {
                return Ok(LoadedStatistics {
                    statistics: fresh,
                    stale: false,
                });
            }
            tracing::debug!(
                "Discarding superseded {} {} response",
                date_type.as_str(),
                view_type.as_str()
            );
            let statistics = state.cache.get(key).unwrap_or(fresh);
            Ok(LoadedStatistics {
                statistics,
                stale: false,
            })
        }
        Err(e) => match state.cache.get(key) {
            Some(statistics) => {
                tracing::warn!(
                    "Serving cached {} {} statistics after fetch failure: {}",
                    date_type.as_str(),
                    view_type.as_str(),
                    e
                );
                Ok(LoadedStatistics {
                    statistics,
                    stale: true,
                })
            }
            None => Err(e),
        },
    }
}

/// Account lookup for rendering `statistics`.
///
/// Account views reload the account list when the statistics mention an id
/// the current lookup does not know, e.g. after a failed start-up load or a
/// new account. A failed reload keeps the current lookup.
pub async fn load_context(
    state: &AppState,
    view_type: ViewType,
    statistics: &[PeriodStatistic],
) -> Arc<ChartContext> {
    let current = state.context();
    if !view_type.is_account_view() || current.knows_all(statistics) {
        return current;
    }

    match state.client.fetch_accounts().await {
        Ok(accounts) => {
            tracing::info!("Reloaded {} accounts", accounts.len());
            let context = Arc::new(ChartContext::new(accounts));
            state.replace_context(Arc::clone(&context));
            context
        }
        Err(e) => {
            tracing::warn!("Could not reload accounts: {}", e);
            current
        }
    }
}
