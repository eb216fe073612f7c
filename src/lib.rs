//! nbview library - notebook parsing and HTML rendering.
//!
//! The conversion pipeline is two pure functions: [`parse_notebook`] turns
//! raw `.ipynb` text into normalized cells, and [`notebook_to_html`] turns
//! those cells plus a highlight.js theme name into a self-contained HTML
//! document. The remaining modules wire that pipeline into a small web
//! application and a command-line converter.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod convert;
pub mod error;
pub mod files;
pub mod handlers;
pub mod markdown;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;
pub mod templates;

use config::Config;
use session::SessionStore;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_ttl_hours, &config.default_theme);
        Self { config, sessions }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/theme", post(handlers::set_theme))
        .route("/notebook", get(handlers::notebook))
        .route("/download", get(handlers::download))
        .route("/clear", post(handlers::clear))
        .route("/api/cells", get(handlers::api_cells))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use error::FormatError;

pub use models::{CellOutput, LoadedNotebook, MimeValue, NotebookCell};

pub use parser::{join_source, parse_data, parse_notebook, parse_notebook_bytes, parse_outputs};

pub use render::{html_escape, notebook_to_html, render_cell, render_output};

pub use markdown::markdown_to_html;

pub use files::{download_file_name, format_file_size, is_notebook_file_name};
