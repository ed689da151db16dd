//! Chat views.

use leptos::prelude::*;

/// 单知识库检索对话 — single-knowledge-base retrieval chat shell.
#[component]
pub fn SingleChatPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="page__title">"单知识库检索对话"</h2>
            <p class="page__summary">"选择一个知识库开始检索增强对话。"</p>
        </section>
    }
}
