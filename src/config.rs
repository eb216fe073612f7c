//! Runtime configuration.
//!
//! Defaults live in constants; each can be overridden with an `NBVIEW_*`
//! environment variable, and the CLI can override the bind address.

use std::env;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_THEME: &str = "github";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// highlight.js themes offered by the theme selector. Any other value is
/// still accepted and passed through to the stylesheet URL.
pub const THEMES: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("github-dark", "GitHub Dark"),
    ("monokai", "Monokai"),
    ("atom-one-light", "Atom One Light"),
    ("atom-one-dark", "Atom One Dark"),
    ("vs", "Visual Studio"),
    ("vs2015", "Visual Studio 2015"),
    ("nord", "Nord"),
];

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub default_theme: String,
    pub max_upload_bytes: usize,
    pub session_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let max_upload_mb = env::var("NBVIEW_MAX_UPLOAD_MB")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|mb| *mb > 0)
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB);

        let session_ttl_hours = env::var("NBVIEW_SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

        Self {
            bind: env::var("NBVIEW_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            default_theme: env::var("NBVIEW_THEME")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_THEME.to_string()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            session_ttl_hours,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            default_theme: DEFAULT_THEME.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.default_theme, "github");
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.session_ttl_hours, 24);
    }

    #[test]
    fn test_default_theme_is_offered() {
        assert!(THEMES.iter().any(|(id, _)| *id == DEFAULT_THEME));
    }
}
