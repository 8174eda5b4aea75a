use std::sync::Arc;

use gridiron_core::{SearchResolver, SearchSession};
use gridiron_stats_data::BalldontlieProvider;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("GRIDIRON_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so they never interleave with rendered results.
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_session(config: &Config) -> SearchSession {
    let provider = Arc::new(BalldontlieProvider::new(config.provider_config()));
    tracing::info!("Using stats provider at {}", config.api_base_url);
    SearchSession::new(SearchResolver::new(provider))
}
