use crate::foodbanks::consts::{DEFAULT_FETCH_TIMEOUT_SECS, GIVE_FOOD_API_URL};
use crate::map::consts::{DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Where the food bank directory is loaded from.
    #[arg(long, value_enum)]
    #[arg(default_value_t = SourceKind::Remote)]
    pub source: SourceKind,
    #[arg(long)]
    #[arg(default_value = GIVE_FOOD_API_URL)]
    pub api_url: Url,
    #[arg(long)]
    #[arg(default_value = "data/foodbanks.json")]
    pub local_path: PathBuf,
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,
    /// Origins allowed to call the API from another site.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value = DEFAULT_TILE_URL)]
    pub tile_url: String,
    #[arg(long)]
    #[arg(default_value = DEFAULT_TILE_ATTRIBUTION)]
    pub tile_attribution: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// The live Give Food API.
    Remote,
    /// A JSON file already in the map's record shape.
    Local,
}
