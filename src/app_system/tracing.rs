use super::config::ShopConfig;

/// Installs the global fmt subscriber, filtered by `config.log_filter`.
pub fn setup_tracing(config: &ShopConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
