//! # Folio - A Desktop Portfolio
//!
//! A single-page personal portfolio rendered as a native desktop app.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the portfolio
//! cargo run
//!
//! # Force a theme for this session (not persisted)
//! cargo run -- --theme dark
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::ThemePreference;
use folio_ui::{run, Flags};

/// Folio - a personal portfolio built in Rust
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Theme for this session only: light or dark
    #[arg(short, long, value_name = "THEME")]
    theme: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    // Build launch flags
    let flags = Flags {
        theme_override: args.theme.as_deref().map(parse_theme).transpose()?,
    };

    // Run the application
    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

fn parse_theme(value: &str) -> anyhow::Result<ThemePreference> {
    match value {
        "light" => Ok(ThemePreference::Light),
        "dark" => Ok(ThemePreference::Dark),
        other => anyhow::bail!("Unknown theme '{}', expected 'light' or 'dark'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["folio"]);
        assert!(args.theme.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_theme() {
        let args = Args::parse_from(["folio", "--theme", "dark"]);
        assert_eq!(args.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme("light").unwrap(), ThemePreference::Light);
        assert_eq!(parse_theme("dark").unwrap(), ThemePreference::Dark);
        assert!(parse_theme("sepia").is_err());
    }
}
