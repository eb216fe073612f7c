//! nbview - Jupyter notebook to HTML viewer.
//!
//! Two subcommands:
//!
//! - `serve`: run the web viewer (upload, preview, theme switch, download)
//! - `convert`: render a notebook file to a standalone HTML file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use nbview::config::Config;
use nbview::convert::convert_file;
use nbview::{app, format_file_size, AppState};

#[derive(Parser)]
#[command(name = "nbview", version, about = "Render Jupyter notebooks to self-contained HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web viewer
    Serve {
        /// Address to listen on (overrides NBVIEW_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Convert a notebook file to HTML
    Convert {
        /// Input .ipynb file
        input: PathBuf,
        /// Output file (defaults to the input name with .html)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// highlight.js theme for code cells
        #[arg(long, env = "NBVIEW_THEME", default_value = nbview::config::DEFAULT_THEME)]
        theme: String,
    },
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls the filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nbview=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind } => serve(bind).await,
        Command::Convert {
            input,
            output,
            theme,
        } => convert(&input, output, &theme).await,
    }
}

async fn serve(bind: Option<String>) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let addr = config.bind.clone();
    let state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("notebook viewer running at http://{}", addr);
    tracing::info!(
        theme = %state.config.default_theme,
        max_upload_bytes = state.config.max_upload_bytes,
        "configuration"
    );

    axum::serve(listener, app(state))
        .await
        .context("server error")?;
    Ok(())
}

async fn convert(input: &Path, output: Option<PathBuf>, theme: &str) -> Result<()> {
    let summary = convert_file(input, output.as_deref(), theme).await?;
    println!(
        "Wrote {} ({} cells, {})",
        summary.output.display(),
        summary.cells,
        format_file_size(summary.bytes_written as u64)
    );
    Ok(())
}
