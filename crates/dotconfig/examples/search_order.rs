//! Print the locations searched for an application, marking those that exist.
//!
//! Usage: `cargo run -p dotconfig --example search_order -- myapp [config.yaml]`

use anyhow::Result;
use dotconfig::{Probe, Resolver};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let app = args.next().unwrap_or_else(|| "myapp".to_string());
    let name = args.next();

    let resolver = Resolver::system();
    match name.as_deref() {
        None => {
            for candidate in resolver.dir_candidates(&app) {
                let mark = if resolver.probe().dir_exists(&candidate) {
                    "*"
                } else {
                    " "
                };
                println!("{mark} {}", candidate.display());
            }
            let chosen = resolver.dir(&app);
            println!("=> {} (exists: {})", chosen.path.display(), chosen.exists);
        }
        Some(name) => {
            for candidate in resolver.file_candidates(&app, name) {
                let status = resolver.probe().file_status(&candidate);
                println!("{status:<12} {}", candidate.display());
            }
            let chosen = resolver.file(&app, name);
            println!("=> {} ({})", chosen.path.display(), chosen.status);
        }
    }

    Ok(())
}
