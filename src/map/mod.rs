use crate::cli::Args;
use models::{MapView, TileLayer};

pub mod consts;
pub mod headless;
pub mod models;
pub mod popup;
pub mod renderer;
pub mod surface;

pub fn init(args: &Args) -> MapView {
    let view = MapView {
        tile_layer: TileLayer {
            url_template: args.tile_url.clone(),
            attribution: args.tile_attribution.clone(),
        },
        ..MapView::default()
    };
    tracing::info!(tile_url = %view.tile_layer.url_template, "Initialized map view.");
    view
}
