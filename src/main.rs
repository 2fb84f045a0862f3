use clap::Parser;
use cli::Args;

mod app_context;
mod cli;
mod filter;
mod foodbanks;
mod health;
mod http;
mod logging;
mod map;
mod page;
mod sessions;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();

    let map_view = map::init(&args);
    let app_context = app_context::init(map_view);
    let _loader = foodbanks::init(&args, app_context.foodbanks.clone());
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Serving the food bank map.");
    axum::serve(listener, router)
        .await
        .expect("The HTTP server stopped unexpectedly.");
}
