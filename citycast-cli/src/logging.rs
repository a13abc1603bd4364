use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr so it never interleaves with rendered weather.
///
/// `RUST_LOG` wins when set; otherwise warnings and errors are shown, or
/// everything down to `debug` with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(verbose);

    tracing_subscriber::registry().with(filter).with(stderr_layer).init();
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
