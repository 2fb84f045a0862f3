use crate::map::models::{LatLng, MarkerId};
use crate::map::surface::MapSurface;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessMarker {
    pub position: LatLng,
    pub popup: Option<Arc<str>>,
    pub attached: bool,
}

/// In-memory [`MapSurface`] that mirrors the state of a browser map.
#[derive(Clone, Debug, Default)]
pub struct HeadlessMapSurface {
    markers: HashMap<MarkerId, HeadlessMarker>,
}

impl HeadlessMapSurface {
    pub fn marker(&self, id: MarkerId) -> Option<&HeadlessMarker> {
        self.markers.get(&id)
    }
}

impl MapSurface for HeadlessMapSurface {
    fn add_marker(&mut self, id: MarkerId, position: LatLng) {
        self.markers
            .entry(id)
            .or_insert(HeadlessMarker {
                position,
                popup: None,
                attached: false,
            })
            .attached = true;
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get_mut(&id) {
            marker.attached = false;
        }
    }

    fn set_popup_content(&mut self, id: MarkerId, html: Arc<str>) {
        match self.markers.get_mut(&id) {
            Some(marker) => marker.popup = Some(html),
            None => tracing::warn!(marker_id = %id, "Popup set on a marker that doesn't exist."),
        }
    }

    fn has_marker(&self, id: MarkerId) -> bool {
        self.markers.get(&id).is_some_and(|marker| marker.attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITION: LatLng = LatLng {
        lat: 52.0,
        lng: -1.0,
    };

    #[test]
    fn added_marker_is_attached() {
        let mut surface = HeadlessMapSurface::default();
        surface.add_marker(MarkerId(0), POSITION);
        assert!(surface.has_marker(MarkerId(0)));
        assert!(surface.marker(MarkerId(0)).unwrap().attached);
    }

    #[test]
    fn removed_marker_keeps_its_popup() {
        let mut surface = HeadlessMapSurface::default();
        surface.add_marker(MarkerId(3), POSITION);
        surface.set_popup_content(MarkerId(3), Arc::from("<strong>A</strong>"));
        surface.remove_marker(MarkerId(3));

        assert!(!surface.has_marker(MarkerId(3)));
        let marker = surface.marker(MarkerId(3)).unwrap();
        assert_eq!(marker.popup.as_deref(), Some("<strong>A</strong>"));
        assert_eq!(marker.position, POSITION);
    }

    #[test]
    fn removing_unknown_marker_is_a_noop() {
        let mut surface = HeadlessMapSurface::default();
        surface.remove_marker(MarkerId(7));
        assert!(!surface.has_marker(MarkerId(7)));
        assert!(surface.marker(MarkerId(7)).is_none());
    }
}
