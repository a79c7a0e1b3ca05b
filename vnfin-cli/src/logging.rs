use tracing_subscriber::{EnvFilter, FmtSubscriber, filter::LevelFilter};

/// Filter directives for diagnostics, e.g. `VNFIN_LOG=debug` or
/// `VNFIN_LOG=vnfin::tcbs=debug,vnfin_cli=info`.
pub const LOG_ENV: &str = "VNFIN_LOG";

/// Install the subscriber. Logs go to stderr, and are off unless
/// `VNFIN_LOG` is set.
pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
