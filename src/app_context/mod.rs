use crate::foodbanks::store::FoodBankStore;
use crate::map::models::MapView;
use crate::sessions::storage::HashMapSessionsStorage;

/// Application state shared by every handler.
#[derive(Clone, Default)]
pub struct AppContext {
    pub foodbanks: FoodBankStore,
    pub sessions: HashMapSessionsStorage,
    pub map_view: MapView,
}

pub fn init(map_view: MapView) -> AppContext {
    AppContext {
        map_view,
        ..AppContext::default()
    }
}
