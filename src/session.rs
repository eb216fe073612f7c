//! Viewer sessions.
//!
//! Each browser gets a random token in a cookie. The token keys an in-memory
//! record holding the one loaded notebook and the selected theme, so a theme
//! change re-renders the stored cells instead of re-parsing the upload.

use crate::models::LoadedNotebook;
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Session cookie name
pub const SESSION_COOKIE: &str = "nbview_session";

/// Length of generated session tokens
pub const SESSION_TOKEN_LEN: usize = 32;

// ============================================================================
// Session Structure
// ============================================================================

#[derive(Debug, Clone)]
pub struct ViewerSession {
    pub notebook: Option<Arc<LoadedNotebook>>,
    pub theme: String,
    pub expires: DateTime<Utc>,
}

// ============================================================================
// Session Store
// ============================================================================

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, ViewerSession>>>,
    ttl: Duration,
    default_theme: String,
}

impl SessionStore {
    pub fn new(ttl_hours: i64, default_theme: &str) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::hours(ttl_hours),
            default_theme: default_theme.to_string(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ViewerSession>> {
        // A poisoned map is still structurally sound.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new, empty session and return its token.
    pub fn create(&self) -> String {
        self.purge_expired();
        let token = create_session_token();
        let session = ViewerSession {
            notebook: None,
            theme: self.default_theme.clone(),
            expires: Utc::now() + self.ttl,
        };
        self.lock().insert(token.clone(), session);
        tracing::debug!("created viewer session");
        token
    }

    /// Snapshot of a live session. Expired sessions are treated as missing.
    pub fn get(&self, token: &str) -> Option<ViewerSession> {
        let now = Utc::now();
        self.lock()
            .get(token)
            .filter(|s| s.expires > now)
            .cloned()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Theme of the session, or the default when there is none.
    pub fn theme(&self, token: &str) -> String {
        self.get(token)
            .map(|s| s.theme)
            .unwrap_or_else(|| self.default_theme.clone())
    }

    /// Replace the session's notebook. Returns false for unknown sessions.
    pub fn load(&self, token: &str, notebook: LoadedNotebook) -> bool {
        let notebook = Arc::new(notebook);
        self.update(token, |s| s.notebook = Some(notebook))
    }

    pub fn set_theme(&self, token: &str, theme: &str) -> bool {
        let theme = theme.to_string();
        self.update(token, |s| s.theme = theme)
    }

    /// Drop the loaded notebook, keeping the session and its theme.
    pub fn clear(&self, token: &str) -> bool {
        self.update(token, |s| s.notebook = None)
    }

    fn update(&self, token: &str, f: impl FnOnce(&mut ViewerSession)) -> bool {
        let now = Utc::now();
        let mut sessions = self.lock();
        match sessions.get_mut(token) {
            Some(session) if session.expires > now => {
                f(session);
                session.expires = now + self.ttl;
                true
            }
            _ => false,
        }
    }

    /// Remove expired sessions, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, s| s.expires > now);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!(purged, "purged expired viewer sessions");
        }
        purged
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Tokens and Cookies
// ============================================================================

/// Random alphanumeric session token
pub fn create_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Session token from the request cookies, if present
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// `Set-Cookie` value for a session token
pub fn session_cookie(token: &str, ttl_hours: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl_hours * 3600
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotebookCell;

    fn notebook(name: &str) -> LoadedNotebook {
        LoadedNotebook {
            file_name: name.to_string(),
            size_bytes: 10,
            loaded_at: Utc::now(),
            cells: vec![NotebookCell::Markdown {
                source: "# hi".into(),
            }],
        }
    }

    #[test]
    fn test_token_shape_and_uniqueness() {
        let a = create_session_token();
        let b = create_session_token();
        assert_eq!(a.len(), SESSION_TOKEN_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_session_uses_default_theme() {
        let store = SessionStore::new(1, "github");
        let token = store.create();
        let session = store.get(&token).unwrap();
        assert_eq!(session.theme, "github");
        assert!(session.notebook.is_none());
        assert_eq!(store.theme("unknown-token"), "github");
    }

    #[test]
    fn test_load_theme_and_clear() {
        let store = SessionStore::new(1, "github");
        let token = store.create();

        assert!(store.load(&token, notebook("a.ipynb")));
        assert!(store.set_theme(&token, "monokai"));
        let session = store.get(&token).unwrap();
        assert_eq!(session.theme, "monokai");
        assert_eq!(session.notebook.unwrap().file_name, "a.ipynb");

        assert!(store.clear(&token));
        let session = store.get(&token).unwrap();
        assert!(session.notebook.is_none());
        assert_eq!(session.theme, "monokai");
    }

    #[test]
    fn test_unknown_session_is_rejected() {
        let store = SessionStore::new(1, "github");
        assert!(!store.load("nope", notebook("a.ipynb")));
        assert!(!store.set_theme("nope", "vs"));
        assert!(!store.clear("nope"));
        assert!(!store.contains("nope"));
    }

    #[test]
    fn test_expired_sessions_are_purged() {
        let store = SessionStore::new(0, "github");
        let token = store.create();
        assert!(store.get(&token).is_none());
        assert_eq!(store.purge_expired(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_session_cookie() {
        assert_eq!(
            session_cookie("abc", 2),
            "nbview_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=7200"
        );
    }
}
