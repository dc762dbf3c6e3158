//! hostfetch - print a short, colorized summary of this host.
//!
//! Usage:
//!   hostfetch                      # print the report
//!   hostfetch --no-color           # plain text
//!   hostfetch --proc-path ./proc   # read a captured /proc tree
//!   hostfetch --license            # license information
//!
//! Every path exits 0; facts that cannot be gathered are shown as
//! placeholders and logged as warnings on stderr.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod cli;
mod report;

use std::io::Write;

use hostfetch_core::collector::{HostCollector, HostEnv, RealFs};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use cli::{Action, Args};

fn main() {
    match cli::resolve(std::env::args_os()) {
        Action::Report(args) => run(args),
        Action::License => emit(report::LICENSE_TEXT),
        Action::Version(text) | Action::Usage(text) => emit(&text),
    }
}

fn run(args: Args) {
    init_logging(args.verbose);

    let collector = HostCollector::new(RealFs::new(), args.paths())
        .with_max_line_len(args.max_line_length as usize);
    let collection = collector.collect(&HostEnv::from_process());
    info!(warnings = collection.warnings.len(), "host facts collected");

    let color = args.use_color(std::env::var_os("NO_COLOR").as_deref());
    emit(&report::render(&collection.snapshot, color));
}

/// Writes to stdout. A closed pipe is not an error for a report tool.
fn emit(text: &str) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        debug!(error = %e, "failed to write report");
    }
}

/// Sets up stderr logging; the default level only shows degraded facts.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
