//! Authenticated app shell: sidebar navigation and content outlet.
//!
//! The sidebar is generated from the route table's `parent` group labels,
//! so adding a route there is enough to surface it in the nav.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::app::use_session_stores;
use crate::config::APP_TITLE;
use crate::routes::{self, LOGIN_PATH};
use crate::session::SessionStores;

/// Layout wrapping every authenticated view.
#[component]
pub fn HomeLayout() -> impl IntoView {
    let stores = use_session_stores();
    let navigate = use_navigate();

    let on_logout = move |_| {
        stores.with_value(SessionStores::clear);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let groups = routes::nav_groups();

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">{APP_TITLE}</div>
                <nav class="layout__nav">
                    {groups
                        .into_iter()
                        .map(|(label, items)| {
                            view! {
                                <section class="layout__group">
                                    <h3 class="layout__group-label">{label}</h3>
                                    <ul>
                                        {items
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <li class="layout__nav-item">
                                                        <A href=item.path>{item.title}</A>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </section>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <button class="btn layout__logout" on:click=on_logout>
                    "退出登录"
                </button>
            </aside>
            <main class="layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
