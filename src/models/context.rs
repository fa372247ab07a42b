use std::collections::HashMap;

use super::{Account, PeriodStatistic};

/// Read-only lookup data the chart functions need.
#[derive(Debug, Clone, Default)]
pub struct ChartContext {
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
}

impl ChartContext {
    pub fn new(accounts: Vec<Account>) -> Self {
        let index = accounts
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Self { accounts, index }
    }

    /// Accounts in backend order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.index.get(id).map(|&i| &self.accounts[i])
    }

    /// True when every value name in `statistics` is a known account id.
    pub fn knows_all(&self, statistics: &[PeriodStatistic]) -> bool {
        statistics
            .iter()
            .flat_map(|s| s.values.iter())
            .all(|v| self.index.contains_key(&v.name))
    }

    /// Resolves an account id to its display title, falling back to the id
    /// itself for accounts the context does not know about.
    pub fn account_title(&self, id: &str) -> String {
        self.account(id)
            .map(Account::title)
            .unwrap_or_else(|| id.to_string())
    }
}
