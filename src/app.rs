//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! Everything the control layer depends on is constructed here and provided
//! via context: the toast queue, the polling registry, the session stores,
//! and the single `ApiClient`. The stores and the client hold `Rc` handles,
//! so they are stowed in `StoredValue<_, LocalStorage>` cells; the cell keys
//! are `Copy + Send + Sync` and safe to capture in callbacks, while the
//! values stay on the UI thread. The client's session-invalidated event is
//! subscribed to here too — the HTTP layer itself never touches the router.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::layout::HomeLayout;
use crate::components::toast_host::ToastHost;
use crate::config;
use crate::guard::NavigationGuard;
use crate::net::client::{ApiClient, ApiHandle, Transport};
use crate::notify::Toasts;
use crate::pages::chat::SingleChatPage;
use crate::pages::knowledge::{DocumentMgtPage, KnowledgeMgtPage, RecallTestPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::system::{
    EmbeddingMgrPage, ModelsMgrPage, ProfileCenterPage, UsersMgrPage,
};
use crate::routes::{HOME_REDIRECT, LOGIN_PATH};
use crate::session::{PollingRegistry, SessionStores};

/// Handle to the session stores provided by [`App`].
#[must_use]
pub fn use_session_stores() -> StoredValue<SessionStores, LocalStorage> {
    expect_context()
}

/// Handle to the polling registry provided by [`App`].
#[must_use]
pub fn use_polling() -> StoredValue<PollingRegistry, LocalStorage> {
    expect_context()
}

/// Handle to the app's single HTTP client.
#[must_use]
pub fn use_api() -> StoredValue<ApiHandle, LocalStorage> {
    expect_context()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = Toasts::new();
    provide_context(toasts);

    let polling = PollingRegistry::new();
    provide_context(StoredValue::new_local(polling.clone()));

    #[cfg(feature = "hydrate")]
    let stores = SessionStores::browser();
    #[cfg(not(feature = "hydrate"))]
    let stores = SessionStores::in_memory();
    provide_context(StoredValue::new_local(stores.clone()));

    #[cfg(feature = "hydrate")]
    let transport: Rc<dyn Transport> =
        Rc::new(crate::net::client::GlooTransport::new(config::REQUEST_TIMEOUT));
    #[cfg(not(feature = "hydrate"))]
    let transport: Rc<dyn Transport> = Rc::new(crate::net::client::OfflineTransport);

    let client = Rc::new(ApiClient::new(
        config::api_base_url(),
        transport,
        Rc::clone(&stores.tokens),
        Rc::new(toasts),
        polling,
    ));
    provide_context(StoredValue::new_local(ApiHandle(client)));

    view! {
        <Title text=config::APP_TITLE/>

        <Router>
            <NavigationGuard/>
            <SessionExpiryRedirect/>
            <ToastHost/>
            <Routes fallback=|| "页面不存在".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_REDIRECT/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("knowledge") view=HomeLayout>
                    <Route path=StaticSegment("mgt") view=KnowledgeMgtPage/>
                    <Route path=StaticSegment("document") view=DocumentMgtPage/>
                    <Route path=StaticSegment("recall-test") view=RecallTestPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("chat") view=HomeLayout>
                    <Route path=StaticSegment("single") view=SingleChatPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("system") view=HomeLayout>
                    <Route path=StaticSegment("users-mgr") view=UsersMgrPage/>
                    <Route path=StaticSegment("models-mgr") view=ModelsMgrPage/>
                    <Route path=StaticSegment("embedding-mgr") view=EmbeddingMgrPage/>
                    <Route path=StaticSegment("profile-center") view=ProfileCenterPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Subscribes to the session-invalidated event and performs the redirect to
/// login, preserving the interrupted location as the `redirect` target.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let api = use_api().get_value();

    api.0.on_session_invalidated(move || {
        let path = location.pathname.get_untracked();
        let search = location.search.get_untracked();
        let full_path = if search.is_empty() { path } else { format!("{path}?{search}") };
        navigate(
            &format!("{LOGIN_PATH}?redirect={full_path}"),
            leptos_router::NavigateOptions::default(),
        );
    });
}
