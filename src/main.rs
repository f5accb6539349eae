use anyhow::{Context, Result};
use clap::Parser;
use rmcp::ServiceExt;
use std::env;
use std::path::PathBuf;
use tracing::info;

use filemod::{
    commands::tools::FileModTools, core::state::create_shared_state, transform::TextEncoding,
};

/// Regex-powered universal file transformer served as an MCP tool
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Workspace root against which relative file paths are resolved
    /// (defaults to the current directory)
    workspace: Option<PathBuf>,

    /// Decode policy applied when reading target files
    #[arg(long, value_enum, default_value = "utf8")]
    encoding: TextEncoding,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure environment variables for debugging if not already defined
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "filemod=info,rmcp=info");
    }

    let cli = Cli::parse();
    let workspace_path = match cli.workspace {
        Some(path) => path,
        None => env::current_dir()?,
    };

    // Initialize with ANSI colors explicitly disabled for MCP compatibility
    filemod::init_with_logger(false).context("Failed to initialize filemod agent")?;

    // Log version and environment information
    info!(
        "Starting filemod v{} on {}",
        filemod::version(),
        std::env::consts::OS
    );

    info!("Using workspace path: {}", workspace_path.display());

    let state = match create_shared_state(&workspace_path, cli.encoding) {
        Ok(state) => {
            info!("Agent state created successfully");
            state
        }
        Err(e) => {
            eprintln!("Failed to create agent state: {}", e);
            return Err(anyhow::anyhow!("Failed to create agent state: {}", e));
        }
    };

    // Create FileModTools instance
    let tools = FileModTools::new(state);

    // Configure MCP server
    info!("Starting MCP server using stdio transport");

    // Use standard stdio transport for MCP communication
    let transport = rmcp::transport::stdio();

    info!("Server starting...");

    let client = match tools.serve(transport).await {
        Ok(client) => {
            info!("MCP server started successfully");
            client
        }
        Err(e) => {
            eprintln!("Failed to start MCP server: {}", e);

            // Attempt to log more details about the error
            if let Some(source) = std::error::Error::source(&e) {
                info!("Caused by: {}", source);
            }

            return Err(anyhow::anyhow!("Failed to start MCP server: {}", e));
        }
    };

    info!("Filemod agent started successfully, waiting for client requests");

    // Wait until the client disconnects with error handling
    match client.waiting().await {
        Ok(_) => {
            info!("Client disconnected gracefully");
        }
        Err(e) => {
            info!("Client connection error: {}", e);
        }
    }

    info!("Shutting down filemod agent");

    Ok(())
}
