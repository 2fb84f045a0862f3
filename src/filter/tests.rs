use crate::filter::{apply, FilterCriteria, ALL_NETWORKS};
use crate::foodbanks::models::FoodBankRecord;
use crate::map::headless::HeadlessMapSurface;
use crate::map::models::{LatLng, MapView, MarkerId};
use crate::map::renderer::{MapEntry, MapRenderer};
use crate::map::surface::MapSurface;
use std::sync::Arc;

/// Counts every attach and detach that reaches the surface.
#[derive(Default)]
struct RecordingSurface {
    inner: HeadlessMapSurface,
    adds: usize,
    removes: usize,
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, id: MarkerId, position: LatLng) {
        self.adds += 1;
        self.inner.add_marker(id, position);
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.removes += 1;
        self.inner.remove_marker(id);
    }

    fn set_popup_content(&mut self, id: MarkerId, html: Arc<str>) {
        self.inner.set_popup_content(id, html);
    }

    fn has_marker(&self, id: MarkerId) -> bool {
        self.inner.has_marker(id)
    }
}

fn record(name: &str, network: &str, postcode: &str) -> FoodBankRecord {
    FoodBankRecord {
        name: name.to_string(),
        location_name: String::new(),
        url: String::new(),
        shopping_list_url: String::new(),
        phone: String::new(),
        email: String::new(),
        address: String::from("1 High St, Town"),
        postcode: postcode.to_string(),
        country: String::from("England"),
        lat: 52.0,
        lon: -1.0,
        network: network.to_string(),
    }
}

fn entries() -> Vec<MapEntry> {
    [
        record("Riverside Foodbank", "Trussell Trust", "RV1 1AA"),
        record("Hope Hub", "Independent", "HP2 2BB"),
        record("Corner Pantry", "", "CP3 3CC"),
    ]
    .into_iter()
    .map(|record| MapEntry::new(Arc::new(record)))
    .collect()
}

fn renderer() -> MapRenderer<RecordingSurface> {
    MapRenderer::render(RecordingSurface::default(), MapView::default(), &entries())
}

#[test]
fn search_is_case_insensitive_substring() {
    let example = record("Example Foodbank", "", "");
    assert!(FilterCriteria::new("food", ALL_NETWORKS).matches(&example));
    assert!(FilterCriteria::new("FOOD", ALL_NETWORKS).matches(&example));
    assert!(FilterCriteria::new("", ALL_NETWORKS).matches(&example));
    assert!(!FilterCriteria::new("xyz", ALL_NETWORKS).matches(&example));
}

#[test]
fn search_text_is_trimmed() {
    let example = record("Example Foodbank", "", "");
    assert!(FilterCriteria::new("  foodbank \n", ALL_NETWORKS).matches(&example));
}

#[test]
fn search_covers_location_address_and_postcode() {
    let example = FoodBankRecord {
        location_name: String::from("Church Hall"),
        ..record("Example Foodbank", "", "EX1 1EX")
    };
    assert!(FilterCriteria::new("church", ALL_NETWORKS).matches(&example));
    assert!(FilterCriteria::new("high st", ALL_NETWORKS).matches(&example));
    assert!(FilterCriteria::new("ex1", ALL_NETWORKS).matches(&example));
    assert!(!FilterCriteria::new("england", ALL_NETWORKS).matches(&example));
}

#[test]
fn network_sentinel_is_case_sensitive() {
    let example = record("Example Foodbank", "Independent", "");
    assert!(FilterCriteria::new("", "All").network_matches(&example));
    assert!(!FilterCriteria::new("", "all").network_matches(&example));
}

#[test]
fn network_compares_case_insensitively() {
    let example = record("Example Foodbank", "Trussell Trust", "");
    assert!(FilterCriteria::new("", "trussell trust").network_matches(&example));
    assert!(!FilterCriteria::new("", "Independent").network_matches(&example));
}

#[test]
fn records_without_network_only_match_all() {
    let example = record("Example Foodbank", "", "");
    assert!(FilterCriteria::default().network_matches(&example));
    assert!(!FilterCriteria::new("", "").network_matches(&example));
}

#[test]
fn selecting_a_network_hides_the_others() {
    let mut renderer = renderer();

    let outcome = apply(&mut renderer, &FilterCriteria::new("", "independent"));

    assert!(outcome.attached.is_empty());
    assert_eq!(outcome.detached, vec![MarkerId(0), MarkerId(2)]);
    assert_eq!(outcome.visible, 1);
    assert!(renderer.is_visible(MarkerId(1)));
}

#[test]
fn all_shows_everything_again() {
    let mut renderer = renderer();
    apply(&mut renderer, &FilterCriteria::new("", "Independent"));

    let outcome = apply(&mut renderer, &FilterCriteria::default());

    assert_eq!(outcome.attached, vec![MarkerId(0), MarkerId(2)]);
    assert!(outcome.detached.is_empty());
    assert_eq!(outcome.visible, 3);
}

#[test]
fn repeated_pass_touches_nothing() {
    let mut renderer = renderer();
    let criteria = FilterCriteria::new("hope", ALL_NETWORKS);

    let first = apply(&mut renderer, &criteria);
    let (adds, removes) = (renderer.surface().adds, renderer.surface().removes);
    let second = apply(&mut renderer, &criteria);

    assert!(!first.is_unchanged());
    assert!(second.is_unchanged());
    assert_eq!(second.visible, first.visible);
    assert_eq!(renderer.surface().adds, adds);
    assert_eq!(renderer.surface().removes, removes);
}

#[test]
fn both_filters_must_match() {
    let mut renderer = renderer();

    let outcome = apply(&mut renderer, &FilterCriteria::new("riverside", "Independent"));

    assert_eq!(outcome.visible, 0);
    assert_eq!(renderer.visible_count(), 0);
}
