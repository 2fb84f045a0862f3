use crate::foodbanks::models::FoodBankRecord;
use crate::map::models::{MapView, MarkerId};
use crate::map::popup;
use crate::map::surface::MapSurface;
use std::sync::Arc;

/// A record together with its popup markup. The markup is rendered once per
/// loaded dataset and shared by every map the record is placed on.
#[derive(Clone, Debug)]
pub struct MapEntry {
    pub record: Arc<FoodBankRecord>,
    pub popup: Arc<str>,
}

impl MapEntry {
    pub fn new(record: Arc<FoodBankRecord>) -> Self {
        let popup = popup::render(&record).into();
        Self { record, popup }
    }
}

/// A marker paired with the record it was created for.
#[derive(Clone, Debug)]
pub struct MarkerBinding {
    pub id: MarkerId,
    pub record: Arc<FoodBankRecord>,
}

/// Owns a map surface and the markers placed on it.
#[derive(Debug)]
pub struct MapRenderer<S: MapSurface> {
    surface: S,
    view: MapView,
    bindings: Vec<MarkerBinding>,
}

impl<S: MapSurface> MapRenderer<S> {
    /// Creates one attached marker per entry, with its popup.
    ///
    /// The binding list is built here and never rebuilt afterwards.
    pub fn render(mut surface: S, view: MapView, entries: &[MapEntry]) -> Self {
        let bindings = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = MarkerId(index);
                surface.add_marker(id, entry.record.position());
                surface.set_popup_content(id, Arc::clone(&entry.popup));
                MarkerBinding {
                    id,
                    record: Arc::clone(&entry.record),
                }
            })
            .collect();
        Self {
            surface,
            view,
            bindings,
        }
    }

    pub fn bindings(&self) -> &[MarkerBinding] {
        &self.bindings
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_visible(&self, id: MarkerId) -> bool {
        self.surface.has_marker(id)
    }

    /// Attaches the marker unless it already is. Returns whether anything
    /// changed.
    pub fn show(&mut self, id: MarkerId) -> bool {
        if self.surface.has_marker(id) {
            return false;
        }
        let Some(binding) = self.bindings.get(id.0) else {
            return false;
        };
        self.surface.add_marker(id, binding.record.position());
        true
    }

    /// Detaches the marker unless it already is. Returns whether anything
    /// changed.
    pub fn hide(&mut self, id: MarkerId) -> bool {
        if !self.surface.has_marker(id) {
            return false;
        }
        self.surface.remove_marker(id);
        true
    }

    pub fn visible_count(&self) -> usize {
        self.bindings
            .iter()
            .filter(|binding| self.surface.has_marker(binding.id))
            .count()
    }
}
