use crate::map::models::{LatLng, MarkerId};
use std::sync::Arc;

/// A rendering backend that can hold markers.
///
/// A marker is either attached (visible on the map) or detached. Detached
/// markers keep their position and popup so they can be re-attached cheaply.
pub trait MapSurface {
    /// Attaches the marker, creating it at `position` if the surface has never
    /// seen `id`. Attaching an already attached marker does nothing.
    fn add_marker(&mut self, id: MarkerId, position: LatLng);

    /// Detaches the marker. Detaching an unknown or detached marker does
    /// nothing.
    fn remove_marker(&mut self, id: MarkerId);

    fn set_popup_content(&mut self, id: MarkerId, html: Arc<str>);

    /// Whether the marker is currently attached.
    fn has_marker(&self, id: MarkerId) -> bool;
}
