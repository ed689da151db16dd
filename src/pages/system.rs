//! System administration views.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::app::use_api;
#[cfg(feature = "hydrate")]
use crate::session::UserInfo;

/// 用户管理 — admin-only user administration shell. Reaching this view at
/// all means the guard accepted an admin session.
#[component]
pub fn UsersMgrPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="page__title">"用户管理"</h2>
            <p class="page__summary">"管理系统用户与角色分配。"</p>
        </section>
    }
}

/// 模型管理 — LLM configuration shell.
#[component]
pub fn ModelsMgrPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="page__title">"模型管理"</h2>
            <p class="page__summary">"配置可用的对话模型。"</p>
        </section>
    }
}

/// 嵌入模型管理 — embedding model configuration shell.
#[component]
pub fn EmbeddingMgrPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="page__title">"嵌入模型管理"</h2>
            <p class="page__summary">"配置向量化所用的嵌入模型。"</p>
        </section>
    }
}

/// 个人中心 — shows the caller's own profile record.
#[component]
pub fn ProfileCenterPage() -> impl IntoView {
    let profile = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let client = use_api().get_value();
        leptos::task::spawn_local(async move {
            if let Ok(envelope) = crate::net::api::profile(&client.0).await {
                if let Ok(user) = envelope.into_data() {
                    profile.set(Some(display_name(&user)));
                }
            }
        });
    }

    view! {
        <section class="page">
            <h2 class="page__title">"个人中心"</h2>
            <p class="page__summary">
                {move || profile.get().unwrap_or_else(|| "加载中...".to_owned())}
            </p>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn display_name(user: &UserInfo) -> String {
    match &user.real_name {
        Some(real_name) if !real_name.is_empty() => {
            format!("{real_name}（{}）", user.user_name)
        }
        _ => user.user_name.clone(),
    }
}
