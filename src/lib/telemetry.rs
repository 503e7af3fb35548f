//! Browser console logging. `tracing` events are formatted without timestamps
//! (the wasm target has no system clock) and written through the console API.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};
use tracing_web::MakeWebConsoleWriter;

/// Installs the global subscriber. `directives` uses `EnvFilter` syntax; invalid
/// directives are skipped and the default level is `info`.
pub fn init(directives: &str) {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives);

    let subscriber = Registry::default().with(fmt_layer).with(filter);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
