use crate::cli::Args;
use source::FoodBankSource;
use store::FoodBankStore;
use tokio::task::JoinHandle;

pub mod consts;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod responses;
pub mod source;
pub mod store;

/// Starts loading the food bank data in the background.
pub fn init(args: &Args, store: FoodBankStore) -> JoinHandle<()> {
    let source = source::from_args(args);
    tokio::spawn(async move { load(source.as_ref(), &store).await })
}

pub async fn load(source: &dyn FoodBankSource, store: &FoodBankStore) {
    tracing::info!(source = %source.describe(), "Loading food bank data.");
    match source.fetch().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "Loaded food bank data.");
            store.set_loaded(records).await;
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load food bank data.");
            store.set_failed(err.to_string()).await;
        }
    }
}
