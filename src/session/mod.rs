//! Session-scoped client state: token, cached user info, polling registry.
//!
//! DESIGN
//! ======
//! Stores are traits so the HTTP layer and the navigation guard receive
//! explicit handles instead of reaching into ambient browser globals. The
//! cookie/localStorage implementations are gated behind `hydrate`; in-memory
//! implementations back native builds and tests.

pub mod polling;
pub mod token;
pub mod user_info;

pub use polling::PollingRegistry;
pub use token::{MemoryTokenStore, StoreError, TokenStore};
pub use user_info::{MemoryUserInfoStore, StoredUserInfo, UserInfo, UserInfoStore};

use std::rc::Rc;

/// The pair of persisted session stores, provided via context at the root.
#[derive(Clone)]
pub struct SessionStores {
    pub tokens: Rc<dyn TokenStore>,
    pub users: Rc<dyn UserInfoStore>,
}

impl SessionStores {
    /// Cookie + localStorage stores for the browser.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        Self {
            tokens: Rc::new(token::CookieTokenStore::new()),
            users: Rc::new(user_info::LocalUserInfoStore::new()),
        }
    }

    /// In-memory stores for native builds and tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            tokens: Rc::new(MemoryTokenStore::new()),
            users: Rc::new(MemoryUserInfoStore::new()),
        }
    }

    /// Drop both persisted records (logout).
    pub fn clear(&self) {
        self.tokens.clear();
        self.users.clear();
    }
}
