// src/logging.rs
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "info";

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// `info` when they are absent or unparsable.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.into())
}

pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            env_filter(Some("sofi_ai=loud")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn debug_directives_enable_handler_logs() {
        let filter = env_filter(Some("sofi_ai=debug,tower_http=info"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
