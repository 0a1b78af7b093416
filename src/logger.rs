//! Logging setup shared by the binaries.
//!
//! Diagnostics go to stderr so `svg-inline` can keep stdout for the document.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{prelude::*, util::SubscriberInitExt, FmtSubscriber};

/// Install the global subscriber. WARN by default, DEBUG with `verbose`.
///
/// `bin_target` is the calling binary's crate name (`env!("CARGO_CRATE_NAME")`);
/// events from it are enabled next to the library's own.
pub fn init(bin_target: &str, verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("gotchi_svg", level)
        .with_target(bin_target, level);

    let subscriber = FmtSubscriber::builder()
        .compact()
        .with_max_level(LevelFilter::TRACE)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = subscriber.with(filter).try_init();
}
