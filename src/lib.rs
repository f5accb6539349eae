// Filemod - a regex-powered universal file transformer served over MCP
// Creates, edits, and transforms files through targeted search and replace

pub mod commands;
pub mod core;
pub mod error;
pub mod transform;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the filemod agent with custom logger configuration
///
/// @param ansi_colors - Whether to enable ANSI color codes in logs
/// When used as an MCP server, this should be false to avoid JSON parsing errors
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    // Configure extremely simple format if ansi_colors is false (MCP mode)
    if !ansi_colors {
        // Minimal configuration without formatting that could interfere with JSON
        fmt::Subscriber::builder()
            .with_ansi(false)
            .with_writer(std::io::stderr) // Write logs to stderr instead of stdout
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .without_time()
            .init();

        info!(
            "Initializing filemod agent v{} (minimal log format for MCP)",
            version()
        );
    } else {
        // Default configuration for CLI usage
        fmt::Subscriber::builder()
            .with_ansi(true)
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(true)
            .init();

        info!("Initializing filemod agent v{}", version());
    }

    Ok(())
}
