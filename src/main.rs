//! Fangy
//!
//! Posts the changelog of a GitHub release as a comment on a 5mods mod page.
//! Meant to run as a release-triggered GitHub Action: every input comes from
//! the `GITHUB_*` and `INPUT_*` environment variables, or the matching flags.
//!
//! # Usage
//! ```bash
//! fangy --event-name release --event-path event.json \
//!   --username me --password secret \
//!   --mod-type scripts --mod-name my-script --feature false
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fangy::error::LOGGING_EXIT_CODE;
use fangy::event::ReleaseEvent;
use fangy::{publish, Config, Inputs, PublishError};

// ============================================================
// Logging
// ============================================================

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting to info
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_logging(inputs: &Inputs) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_env_filter(log_filter(inputs.verbose))
        .with_target(false)
        .with_writer(std::io::stderr);

    match inputs.log_format.as_str() {
        "json" => tracing::subscriber::set_global_default(builder.json().finish())?,
        _ => tracing::subscriber::set_global_default(builder.finish())?,
    }
    Ok(())
}

// ============================================================
// Main Entry Point
// ============================================================

async fn run(inputs: &Inputs) -> Result<u64, PublishError> {
    let config = Config::from_inputs(inputs)?;
    let event = ReleaseEvent::load(&config.event_path)?;

    info!(
        mod_type = %config.mod_type,
        mod_name = %config.mod_name,
        pin = config.pin,
        feature = config.feature,
        "🚀 Publishing release changelog to 5mods"
    );

    publish(&config, &event).await
}

#[tokio::main]
async fn main() {
    let inputs = Inputs::parse();

    if let Err(err) = init_logging(&inputs) {
        eprintln!("Unable to set up logging: {:#}", err);
        std::process::exit(LOGGING_EXIT_CODE);
    }

    match run(&inputs).await {
        Ok(comment_id) => println!("Done! (Comment ID: {})", comment_id),
        Err(err) => {
            error!("❌ {}", err);
            std::process::exit(err.exit_code())
        }
    }
}
