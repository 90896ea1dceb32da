use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::CliError;

/// Install a stderr subscriber; `RUST_LOG` overrides the default `warn` level.
pub fn init_logging(json: bool) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = tracing_subscriber::fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    result.map_err(|err| CliError::Logging(err.to_string()))
}
