//! openapi-enhance — post-process a generated OpenAPI JSON document for client generators.
//!
//! Rewrites the document in place so that:
//!
//! - every operation has an `operationId` (`{method}_{path slug}` when missing)
//! - every tag used by an operation is registered in the top-level `tags` list
//!
//! Usage: `openapi-enhance docs/swagger/swagger-3-0.json`

mod document;
mod error;
mod normalize;
mod slug;
mod tags;

use clap::Parser;
use error::EnhanceError;
use normalize::Report;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "openapi-enhance",
    about = "Ensure operationIds and top-level tags in an OpenAPI JSON document"
)]
struct Cli {
    /// OpenAPI JSON document, rewritten in place
    spec: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match enhance(&cli.spec) {
        Ok(report) => {
            println!(
                "Enhanced {}: operations={}, generated_operation_ids={}, top_level_tags={}",
                cli.spec.display(),
                report.operations,
                report.generated_operation_ids,
                report.top_level_tags
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("error: {:#}", anyhow::Error::new(err));
            ExitCode::from(code)
        }
    }
}

/// Load, normalize and write back one document. Nothing is written on error.
fn enhance(path: &Path) -> Result<Report, EnhanceError> {
    let mut doc = document::load(path)?;
    let report = normalize::normalize(&mut doc)?;
    document::save(path, &doc)?;
    Ok(report)
}

/// Log to stderr; stdout is reserved for the summary line.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
