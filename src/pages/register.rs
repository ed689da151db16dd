//! Registration page. New accounts are always plain users; roles are
//! assigned by an admin afterwards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_api;
use crate::net::types::RegisterRequest;
use crate::notify::{Notify, Toasts};
use crate::routes::LOGIN_PATH;

/// Registration form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let toasts = expect_context::<Toasts>();
    let api = use_api();
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let user = username.get().trim().to_owned();
        let mail = email.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || mail.is_empty() || pass.is_empty() {
            toasts.error("请填写完整的注册信息");
            return;
        }
        if pass != confirm.get() {
            toasts.error("两次输入的密码不一致");
            return;
        }
        if busy.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let client = api.get_value();
            let navigate = navigate.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                let request = RegisterRequest {
                    username: user,
                    password: pass,
                    email: mail,
                    real_name: None,
                    phone: None,
                };
                match crate::net::api::register(&client.0, &request).await {
                    Ok(envelope) => {
                        if envelope.is_success() {
                            toasts.success("注册成功，请登录");
                            navigate(LOGIN_PATH, NavigateOptions::default());
                        } else if envelope.message.is_empty() {
                            toasts.error("注册失败");
                        } else {
                            toasts.error(&envelope.message);
                        }
                    }
                    Err(_) => {}
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, mail, pass, api, &navigate);
        }
    });

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"注册账号"</h1>
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
                    "邮箱"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                <label class="auth-page__label">
                    "确认密码"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "提交中..." } else { "注册" }}
                </button>
            </form>
            <p class="auth-page__hint">
                "已有账号？" <a href="/login">"登录"</a>
            </p>
        </div>
    }
}
