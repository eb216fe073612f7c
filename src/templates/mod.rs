//! HTML templates and styling for the notebook viewer.
//!
//! ## Module Structure
//!
//! - `styles` - CSS for the application and for rendered notebooks
//! - `components` - Shared HTML components (nav bar, input panel, base template)
//! - `viewer` - The viewer page with the notebook preview frame

mod styles;
mod components;
mod viewer;

pub use styles::{NOTEBOOK_STYLE, STYLE};
pub use components::{base_html, error_message, nav_bar, theme_selector};
pub use viewer::render_viewer;
