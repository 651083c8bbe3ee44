//! lcdnum - seven-segment LCD numbers for your terminal
//!
//! ```text
//!     _
//! | | _|   the number 42,
//!   ||_    seven-segment style
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// lcdnum - Seven-Segment LCD Number Renderer
#[derive(Parser, Debug)]
#[command(name = "lcdnum")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number to render (must be non-negative)
    #[arg(allow_negative_numbers = true)]
    number: i64,

    /// Digit width in columns (requires --height)
    #[arg(short = 'W', long, requires = "height")]
    width: Option<usize>,

    /// Rows per vertical digit section (requires --width)
    #[arg(short = 'H', long, requires = "width")]
    height: Option<usize>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up logging. Logs go to stderr; stdout carries only the rendered
    // block.
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("lcdnum={}", log_level)),
        ))
        .init();

    tracing::debug!(
        "Starting lcdnum v{} (core v{})",
        env!("CARGO_PKG_VERSION"),
        lcdnum_core::VERSION
    );

    // render/render_sized print the finished block to stdout themselves.
    match (args.width, args.height) {
        (Some(width), Some(height)) => {
            lcdnum_core::render_sized(args.number, width, height)?;
        }
        _ => {
            lcdnum_core::render(args.number)?;
        }
    }

    Ok(())
}
