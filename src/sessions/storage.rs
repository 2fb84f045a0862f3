use crate::filter::{self, FilterCriteria, FilterOutcome};
use crate::map::headless::HeadlessMapSurface;
use crate::map::models::MapView;
use crate::map::renderer::{MapEntry, MapRenderer};
use crate::sessions::consts::MAX_SESSIONS;
use crate::sessions::responses::SessionMarker;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

type SessionRenderer = MapRenderer<HeadlessMapSurface>;

#[derive(Default)]
struct Sessions {
    renderers: HashMap<Uuid, SessionRenderer>,
    // Oldest first.
    creation_order: VecDeque<Uuid>,
}

/// Server-side mirrors of the open map pages.
#[derive(Clone)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<Sessions>>,
    capacity: usize,
}

impl Default for HashMapSessionsStorage {
    fn default() -> Self {
        Self::with_capacity(MAX_SESSIONS)
    }
}

impl HashMapSessionsStorage {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    /// Renders every entry into a fresh session. Evicts the oldest session
    /// when full.
    pub async fn create(
        &self,
        view: MapView,
        entries: &[MapEntry],
    ) -> (Uuid, MapView, Vec<SessionMarker>) {
        let renderer = MapRenderer::render(HeadlessMapSurface::default(), view, entries);
        let view = renderer.view().clone();
        let markers = snapshot(&renderer);
        let session_id = Uuid::new_v4();

        let mut sessions = self.storage.write().await;
        while sessions.renderers.len() >= self.capacity {
            let Some(oldest) = sessions.creation_order.pop_front() else {
                break;
            };
            sessions.renderers.remove(&oldest);
            tracing::warn!(session_id = %oldest, "Evicted the oldest map session.");
        }
        sessions.renderers.insert(session_id, renderer);
        sessions.creation_order.push_back(session_id);

        (session_id, view, markers)
    }

    /// Runs one filter pass over the session's markers. `None` if the session
    /// doesn't exist.
    pub async fn filter(
        &self,
        session_id: Uuid,
        criteria: &FilterCriteria,
    ) -> Option<FilterOutcome> {
        let mut sessions = self.storage.write().await;
        let renderer = sessions.renderers.get_mut(&session_id)?;
        Some(filter::apply(renderer, criteria))
    }

    #[cfg(test)]
    pub async fn contains(&self, session_id: Uuid) -> bool {
        self.storage.read().await.renderers.contains_key(&session_id)
    }

    pub async fn len(&self) -> usize {
        self.storage.read().await.renderers.len()
    }
}

fn snapshot(renderer: &SessionRenderer) -> Vec<SessionMarker> {
    renderer
        .bindings()
        .iter()
        .map(|binding| {
            let marker = renderer.surface().marker(binding.id);
            SessionMarker {
                id: binding.id,
                lat: binding.record.lat,
                lng: binding.record.lon,
                popup: marker
                    .and_then(|marker| marker.popup.as_deref())
                    .unwrap_or_default()
                    .to_string(),
                visible: marker.is_some_and(|marker| marker.attached),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ALL_NETWORKS;
    use crate::foodbanks::models::FoodBankRecord;
    use crate::map::models::MarkerId;

    fn records() -> Vec<MapEntry> {
        ["Riverside Foodbank", "Hope Hub"]
            .into_iter()
            .map(|name| {
                MapEntry::new(Arc::new(FoodBankRecord {
                    name: name.to_string(),
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
                    network: String::new(),
                }))
            })
            .collect()
    }

    #[tokio::test]
    async fn created_session_shows_every_marker() {
        let storage = HashMapSessionsStorage::default();

        let (session_id, _, markers) = storage.create(MapView::default(), &records()).await;

        assert!(storage.contains(session_id).await);
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|marker| marker.visible));
        assert_eq!(markers[1].popup, "<strong>Hope Hub</strong>");
    }

    #[tokio::test]
    async fn sessions_filter_independently() {
        let storage = HashMapSessionsStorage::default();
        let (first, _, _) = storage.create(MapView::default(), &records()).await;
        let (second, _, _) = storage.create(MapView::default(), &records()).await;

        let outcome = storage
            .filter(first, &FilterCriteria::new("hope", ALL_NETWORKS))
            .await
            .unwrap();
        assert_eq!(outcome.detached, vec![MarkerId(0)]);

        let outcome = storage
            .filter(second, &FilterCriteria::default())
            .await
            .unwrap();
        assert!(outcome.is_unchanged());
        assert_eq!(outcome.visible, 2);
    }

    #[tokio::test]
    async fn unknown_session_is_none() {
        let storage = HashMapSessionsStorage::default();
        assert!(storage
            .filter(Uuid::new_v4(), &FilterCriteria::default())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn oldest_session_is_evicted() {
        let storage = HashMapSessionsStorage::with_capacity(2);
        let (first, _, _) = storage.create(MapView::default(), &records()).await;
        let (second, _, _) = storage.create(MapView::default(), &records()).await;
        let (third, _, _) = storage.create(MapView::default(), &records()).await;

        assert_eq!(storage.len().await, 2);
        assert!(!storage.contains(first).await);
        assert!(storage.contains(second).await);
        assert!(storage.contains(third).await);
    }

    #[tokio::test]
    async fn evicted_session_can_be_replaced_and_refiltered() {
        let storage = HashMapSessionsStorage::with_capacity(1);
        let records = records();
        let (evicted, _, _) = storage.create(MapView::default(), &records).await;
        storage.create(MapView::default(), &records).await;
        let criteria = FilterCriteria::new("hope", ALL_NETWORKS);

        assert!(storage.filter(evicted, &criteria).await.is_none());

        let (replacement, _, markers) = storage.create(MapView::default(), &records).await;
        assert!(markers.iter().all(|marker| marker.visible));
        let outcome = storage.filter(replacement, &criteria).await.unwrap();
        assert_eq!(outcome.detached, vec![MarkerId(0)]);
        assert_eq!(outcome.visible, 1);
        assert_eq!(storage.len().await, 1);
    }
}
