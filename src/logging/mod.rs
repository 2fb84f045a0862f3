use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "foodbank_map=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(
            DEFAULT_DIRECTIVE
                .parse()
                .expect("The default logging directive is invalid."),
        )
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
