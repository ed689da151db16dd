//! Knowledge-base views: database list, document management, recall testing.
//!
//! These shells exercise the control layer (list fetches and vectorization
//! progress polling); the full editing UI lives behind them.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::app::{use_api, use_polling};
#[cfg(feature = "hydrate")]
use crate::net::types::Envelope;

/// 知识库管理 — knowledge database list.
#[component]
pub fn KnowledgeMgtPage() -> impl IntoView {
    let databases = RwSignal::new(Vec::<serde_json::Value>::new());

    #[cfg(feature = "hydrate")]
    {
        let client = use_api().get_value();
        leptos::task::spawn_local(async move {
            let result: Result<Envelope<serde_json::Value>, _> =
                client.0.get("/v1/knowledge/database/list").await;
            if let Ok(envelope) = result {
                if let Ok(data) = envelope.into_data() {
                    databases.set(list_items(&data, "databases"));
                }
            }
        });
    }

    view! {
        <section class="page">
            <h2 class="page__title">"知识库管理"</h2>
            <p class="page__summary">
                {move || format!("共 {} 个知识库", databases.get().len())}
            </p>
        </section>
    }
}

/// 文档管理 — document list with vectorization progress polling.
///
/// The poll loop registers its cancellation with the polling registry, so a
/// forced logout stops it along with every other poller.
#[component]
pub fn DocumentMgtPage() -> impl IntoView {
    let documents = RwSignal::new(Vec::<serde_json::Value>::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::session::polling::start_polling;

        let client = use_api().get_value();
        let polling = use_polling().get_value();

        let fetch = move || {
            let client = client.clone();
            async move {
                let result: Result<Envelope<serde_json::Value>, _> =
                    client.0.get("/v1/knowledge/document/list").await;
                if let Ok(envelope) = result {
                    if let Ok(data) = envelope.into_data() {
                        documents.set(list_items(&data, "documents"));
                    }
                }
            }
        };

        leptos::task::spawn_local(fetch());
        start_polling(&polling, std::time::Duration::from_secs(5), fetch);
    }

    view! {
        <section class="page">
            <h2 class="page__title">"文档管理"</h2>
            <p class="page__summary">
                {move || format!("共 {} 个文档", documents.get().len())}
            </p>
        </section>
    }
}

/// 召回检索测试 — recall testing shell.
#[component]
pub fn RecallTestPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="page__title">"召回检索测试"</h2>
            <p class="page__summary">"选择知识库后输入查询语句进行召回测试。"</p>
        </section>
    }
}

/// Pull a named array out of a list payload, tolerating a missing field.
#[cfg(feature = "hydrate")]
fn list_items(data: &serde_json::Value, field: &str) -> Vec<serde_json::Value> {
    data.get(field)
        .and_then(serde_json::Value::as_array)
        .cloned()
        .unwrap_or_default()
}
