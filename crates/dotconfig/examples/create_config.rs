//! Resolve the config locations for an application and prepare them on disk.
//!
//! Usage: `cargo run -p dotconfig --example create_config -- myapp config.yaml`
//!
//! Set `RUST_LOG=dotconfig=trace` to see every candidate that is probed.

use anyhow::{Context, Result};
use dotconfig::FileStatus;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let app = args.next().unwrap_or_else(|| "myapp".to_string());
    let name = args.next().unwrap_or_else(|| "config.yaml".to_string());

    let dir = dotconfig::dir(&app);
    dir.create_if_missing()
        .with_context(|| format!("Failed to prepare config directory for {app}"))?;
    println!("dir:  {}", dir.path.display());

    let file = dotconfig::file(&app, &name);
    if file.status != FileStatus::FileExists {
        file.create_parent_if_missing()
            .with_context(|| format!("Failed to prepare directory for {name}"))?;
        std::fs::write(&file.path, b"")
            .with_context(|| format!("Failed to create {}", file.path.display()))?;
    }
    println!("file: {} ({})", file.path.display(), file.status);

    Ok(())
}
