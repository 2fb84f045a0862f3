use crate::foodbanks::models::FoodBankRecord;
use crate::map::renderer::MapEntry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Arc<[MapEntry]>),
    Failed(String),
}

/// The food bank dataset, shared between the loader task and the handlers.
#[derive(Clone, Default)]
pub struct FoodBankStore {
    state: Arc<RwLock<LoadState>>,
}

impl FoodBankStore {
    #[cfg(test)]
    pub fn loaded(records: Vec<FoodBankRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Self::to_loaded(records))),
        }
    }

    pub async fn snapshot(&self) -> LoadState {
        self.state.read().await.clone()
    }

    pub async fn set_loaded(&self, records: Vec<FoodBankRecord>) {
        *self.state.write().await = Self::to_loaded(records);
    }

    pub async fn set_failed(&self, reason: String) {
        *self.state.write().await = LoadState::Failed(reason);
    }

    /// Distinct non-empty networks, deduplicated case-insensitively and
    /// sorted. The first spelling seen wins.
    pub async fn networks(&self) -> Vec<String> {
        match &*self.state.read().await {
            LoadState::Loaded(entries) => distinct_networks(entries),
            LoadState::Pending | LoadState::Failed(_) => Vec::new(),
        }
    }

    fn to_loaded(records: Vec<FoodBankRecord>) -> LoadState {
        LoadState::Loaded(
            records
                .into_iter()
                .map(|record| MapEntry::new(Arc::new(record)))
                .collect(),
        )
    }
}

pub fn distinct_networks(entries: &[MapEntry]) -> Vec<String> {
    let mut networks = BTreeMap::new();
    for record in entries
        .iter()
        .map(|entry| &entry.record)
        .filter(|record| !record.network.is_empty())
    {
        networks
            .entry(record.network.to_lowercase())
            .or_insert_with(|| record.network.clone());
    }
    networks.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(network: &str) -> FoodBankRecord {
        FoodBankRecord {
            name: String::from("Example Foodbank"),
            location_name: String::new(),
            url: String::new(),
            shopping_list_url: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            postcode: String::new(),
            country: String::new(),
            lat: 52.0,
            lon: -1.0,
            network: network.to_string(),
        }
    }

    #[tokio::test]
    async fn starts_pending() {
        let store = FoodBankStore::default();
        assert!(matches!(store.snapshot().await, LoadState::Pending));
        assert!(store.networks().await.is_empty());
    }

    #[tokio::test]
    async fn networks_are_distinct_and_sorted() {
        let store = FoodBankStore::default();
        store
            .set_loaded(vec![
                record("Trussell Trust"),
                record(""),
                record("Independent"),
                record("trussell trust"),
            ])
            .await;

        assert_eq!(store.networks().await, vec!["Independent", "Trussell Trust"]);
    }

    #[tokio::test]
    async fn failure_is_kept() {
        let store = FoodBankStore::default();
        store.set_failed(String::from("boom")).await;
        assert!(matches!(store.snapshot().await, LoadState::Failed(reason) if reason == "boom"));
    }
}
