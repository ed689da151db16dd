//! Session token storage.
//!
//! The token is an opaque bearer credential issued at login. The browser
//! implementation keeps it in a cookie under [`crate::config::TOKEN_COOKIE_KEY`]
//! so it survives reloads; expiry is entirely server-driven via 401, so no
//! client-side expiry is tracked.

use std::cell::RefCell;

use thiserror::Error;

/// Error reading or writing the token store.
///
/// A request whose token read fails is aborted before transmission
/// (fail closed), so this surfaces as a send failure to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage for the single active session token.
pub trait TokenStore {
    /// Read the current token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying store cannot be read at all.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Persist a new token, replacing any existing one.
    fn set(&self, token: &str);

    /// Remove the token.
    fn clear(&self);
}

/// In-memory token store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.borrow().clone())
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Cookie-backed token store. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct CookieTokenStore;

#[cfg(feature = "hydrate")]
impl CookieTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn document() -> Result<web_sys::HtmlDocument, StoreError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| StoreError::Unavailable("no document".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for CookieTokenStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        let cookies = Self::document()?
            .cookie()
            .map_err(|_| StoreError::Unavailable("cookie read failed".to_owned()))?;
        Ok(read_cookie(&cookies, crate::config::TOKEN_COOKIE_KEY))
    }

    fn set(&self, token: &str) {
        if let Ok(doc) = Self::document() {
            let _ = doc.set_cookie(&format!(
                "{}={token}; path=/",
                crate::config::TOKEN_COOKIE_KEY
            ));
        }
    }

    fn clear(&self) {
        if let Ok(doc) = Self::document() {
            let _ = doc.set_cookie(&format!(
                "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT",
                crate::config::TOKEN_COOKIE_KEY
            ));
        }
    }
}

/// Extract a cookie value from a `document.cookie` string.
#[cfg(feature = "hydrate")]
fn read_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == key && !value.is_empty()).then(|| value.to_owned())
    })
}
