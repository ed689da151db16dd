//! Cached user info backing role checks in the navigation guard.
//!
//! The record mirrors the backend login payload and is persisted as JSON in
//! localStorage. Stored data may be absent or corrupt (e.g. written by an
//! older build); loading never fails — corrupt data is reported as
//! [`StoredUserInfo::Malformed`] and treated as "no user" by callers.

#[cfg(test)]
#[path = "user_info_test.rs"]
mod user_info_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// Role id the backend assigns to administrators.
pub const ADMIN_ROLE_ID: i64 = 1;

/// User record returned by the login endpoint and cached client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role_id: i64,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub role_desc: Option<String>,
    #[serde(default)]
    pub permissions: serde_json::Map<String, serde_json::Value>,
}

impl UserInfo {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role_id == ADMIN_ROLE_ID
    }
}

/// Typed result of loading the persisted user record.
///
/// `Malformed` is distinct from `Absent` so callers can tell "never logged
/// in" from "corrupt cache", even though both gate the same way.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredUserInfo {
    Present(UserInfo),
    Absent,
    Malformed,
}

impl StoredUserInfo {
    /// Parse a raw persisted value. `None`, empty, and the literal string
    /// `"undefined"` (written by older builds) all count as absent.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else { return Self::Absent };
        if raw.is_empty() || raw == "undefined" {
            return Self::Absent;
        }
        match serde_json::from_str::<UserInfo>(raw) {
            Ok(user) => Self::Present(user),
            Err(err) => {
                log::warn!("failed to parse stored user info: {err}");
                Self::Malformed
            }
        }
    }

    /// The user record, if one was loaded intact.
    #[must_use]
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Self::Present(user) => Some(user),
            Self::Absent | Self::Malformed => None,
        }
    }
}

/// Storage for the cached user record.
pub trait UserInfoStore {
    fn load(&self) -> StoredUserInfo;
    fn save(&self, user: &UserInfo);
    fn clear(&self);
}

/// In-memory user info store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryUserInfoStore {
    raw: RefCell<Option<String>>,
}

impl MemoryUserInfoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw serialized value, valid or not.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self { raw: RefCell::new(Some(raw.to_owned())) }
    }
}

impl UserInfoStore for MemoryUserInfoStore {
    fn load(&self) -> StoredUserInfo {
        StoredUserInfo::parse(self.raw.borrow().as_deref())
    }

    fn save(&self, user: &UserInfo) {
        if let Ok(json) = serde_json::to_string(user) {
            *self.raw.borrow_mut() = Some(json);
        }
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}

/// localStorage-backed user info store. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalUserInfoStore;

#[cfg(feature = "hydrate")]
impl LocalUserInfoStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl UserInfoStore for LocalUserInfoStore {
    fn load(&self) -> StoredUserInfo {
        let raw = Self::storage().and_then(|s| {
            s.get_item(crate::config::USER_INFO_STORAGE_KEY).ok().flatten()
        });
        StoredUserInfo::parse(raw.as_deref())
    }

    fn save(&self, user: &UserInfo) {
        if let (Some(storage), Ok(json)) = (Self::storage(), serde_json::to_string(user)) {
            let _ = storage.set_item(crate::config::USER_INFO_STORAGE_KEY, &json);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(crate::config::USER_INFO_STORAGE_KEY);
        }
    }
}
