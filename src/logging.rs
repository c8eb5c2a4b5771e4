use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::log_directive;

/// Install the global subscriber for the CLI.
///
/// Logs go to stderr so stdout only carries encoded output. `RUST_LOG`
/// overrides the default filter chosen by `verbose`.
pub fn setup_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    let directive = log_directive(verbose);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter {directive:?}"))?;

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_target(verbose)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
