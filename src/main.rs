use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SPLICER_LOG=debug`.
const LOG_ENV: &str = "SPLICER_LOG";

fn main() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    splicer::app::cli::run();
}
