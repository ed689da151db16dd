//! Navigation guard: gates every route transition on auth and role.
//!
//! DESIGN
//! ======
//! The decision itself ([`evaluate`]) is a pure function over the matched
//! route chain, the session token, and the cached user info, so the whole
//! matrix is testable natively. The [`NavigationGuard`] component wires it
//! into the router: it reacts to each location change, shows at most one
//! toast, performs at most one redirect, and otherwise lets the transition
//! proceed (setting the document title from route metadata).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session_stores;
use crate::config::APP_TITLE;
use crate::notify::{Notify, Toasts};
use crate::routes::{self, LOGIN_PATH};
use crate::session::{StoredUserInfo, UserInfo};

/// Outcome of guarding one route transition. Exactly one is produced per
/// transition; nothing is left pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition through, setting the title when the route has one.
    Proceed { title: Option<&'static str> },
    /// No session: send to login, remembering where the user was headed.
    RedirectToLogin { redirect: String },
    /// Admin-gated route without the admin role: send home.
    DeniedRedirectHome,
    /// Already authenticated users cannot revisit the login page.
    AlreadyAuthedRedirectHome,
}

impl GuardDecision {
    /// Toast to show for this decision, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin { .. } => Some("登录状态已过期，请重新登录"),
            Self::DeniedRedirectHome => Some("您没有权限访问此页面"),
            Self::Proceed { .. } | Self::AlreadyAuthedRedirectHome => None,
        }
    }

    /// Where to navigate instead of the destination, if anywhere.
    #[must_use]
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Proceed { .. } => None,
            Self::RedirectToLogin { redirect } => {
                Some(format!("{LOGIN_PATH}?redirect={redirect}"))
            }
            Self::DeniedRedirectHome | Self::AlreadyAuthedRedirectHome => Some("/".to_owned()),
        }
    }
}

/// Document title for a proceeding transition, when the route names one.
#[must_use]
pub fn document_title(title: &str) -> String {
    format!("{title} - {APP_TITLE}")
}

/// Decide what to do with a transition to `path` (`full_path` includes the
/// query string and becomes the post-login redirect target).
///
/// First match wins:
/// 1. no token, destination requires auth, and is not login → login redirect;
/// 2. destination requires admin and the user is not one → home;
/// 3. token present and destination is login → home;
/// 4. proceed.
#[must_use]
pub fn evaluate(
    path: &str,
    full_path: &str,
    token: Option<&str>,
    user: &StoredUserInfo,
) -> GuardDecision {
    let chain = routes::resolve(path);
    // An unmatched path carries no metadata, so it gates like the original:
    // no matched segment demands auth.
    let matched = chain.as_deref().unwrap_or(&[]);
    let requires_auth = !matched.is_empty() && !matched.iter().any(|n| n.meta.no_auth);
    let requires_admin = matched.iter().any(|n| n.meta.requires_admin);
    let is_login = path == LOGIN_PATH;

    if token.is_none() && requires_auth && !is_login {
        return GuardDecision::RedirectToLogin { redirect: full_path.to_owned() };
    }
    if requires_admin && !user.user().is_some_and(UserInfo::is_admin) {
        return GuardDecision::DeniedRedirectHome;
    }
    if token.is_some() && is_login {
        return GuardDecision::AlreadyAuthedRedirectHome;
    }
    GuardDecision::Proceed { title: matched.last().and_then(|n| n.meta.title) }
}

/// Router-mounted component running the guard on every location change.
#[component]
pub fn NavigationGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let toasts = expect_context::<Toasts>();
    let stores = use_session_stores();

    Effect::new(move || {
        let path = location.pathname.get();
        let search = location.search.get();
        let full_path =
            if search.is_empty() { path.clone() } else { format!("{path}?{search}") };

        let stores = stores.get_value();
        let token = stores.tokens.get().ok().flatten();
        let user = stores.users.load();
        let decision = evaluate(&path, &full_path, token.as_deref(), &user);

        if let Some(notice) = decision.notice() {
            toasts.error(notice);
        }
        match decision.redirect_target() {
            Some(target) => navigate(&target, NavigateOptions::default()),
            None => {
                if let GuardDecision::Proceed { title: Some(title) } = decision {
                    set_document_title(&document_title(title));
                }
            }
        }
    });
}

#[cfg(feature = "hydrate")]
fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

#[cfg(not(feature = "hydrate"))]
fn set_document_title(_title: &str) {}
