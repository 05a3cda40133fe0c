//! tarsh entry point.
//!
//! ```bash
//! tarsh myhost ./rootfs.tar ./session-log.xml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tarsh_repl::Config;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the shell. Respects RUST_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = Config::parse();
    tarsh_repl::run(&config)
}
