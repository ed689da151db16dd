//! Login page: authenticates, persists the session, and honors the
//! `redirect` query parameter written by the guard and the 401 path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::{use_api, use_session_stores};
use crate::notify::{Notify, Toasts};
use crate::routes::HOME_REDIRECT;

/// Login form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let toasts = expect_context::<Toasts>();
    let stores = use_session_stores();
    let api = use_api();
    let navigate = use_navigate();
    let query = use_query_map();

    let submit = Callback::new(move |()| {
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            toasts.error("请输入用户名和密码");
            return;
        }
        if busy.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let stores = stores.get_value();
            let client = api.get_value();
            let navigate = navigate.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&client.0, &user, &pass).await {
                    Ok(envelope) => match envelope.into_data() {
                        Ok(data) => {
                            stores.tokens.set(&data.token);
                            stores.users.save(&data.user);
                            toasts.success("登录成功");
                            let target = query
                                .get_untracked()
                                .get("redirect")
                                .unwrap_or_else(|| HOME_REDIRECT.to_owned());
                            navigate(&target, NavigateOptions::default());
                        }
                        Err(message) => {
                            // Logical failure under HTTP 200: show the
                            // server's message.
                            if message.is_empty() {
                                toasts.error("账号或密码错误");
                            } else {
                                toasts.error(&message);
                            }
                        }
                    },
                    // Transport-level failures were already toasted by the
                    // client layer.
                    Err(_) => {}
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, stores, api, &navigate, &query);
        }
    });

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"知识库管理系统"</h1>
            <form
                class="auth-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-page__label">
                    "用户名"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "密码"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "登录中..." } else { "登录" }}
                </button>
            </form>
            <p class="auth-page__hint">
                "没有账号？" <a href="/register">"注册"</a>
            </p>
        </div>
    }
}
