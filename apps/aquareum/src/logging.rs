use std::sync::OnceLock;

use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Safe to call more than once.
pub fn init() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_timer(LocalTime::rfc_3339())
            .with_target(true)
            .try_init();
    });
}

fn env_filter() -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env("AQUAREUM_LOG") {
        return filter;
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn repeated_init_is_harmless() {
        init();
        init();
    }
}
