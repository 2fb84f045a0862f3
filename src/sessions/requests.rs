use crate::filter::ALL_NETWORKS;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct FilterQueryParams {
    #[serde(default)]
    pub search: String,
    #[serde(default = "all_networks")]
    pub network: String,
}

fn all_networks() -> String {
    ALL_NETWORKS.to_string()
}
