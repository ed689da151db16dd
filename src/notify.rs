//! Transient user notifications (toasts).
//!
//! All user-facing feedback from the control layer goes through the
//! [`Notify`] trait so the HTTP client and guard stay testable without a
//! rendered UI. The production implementation is [`Toasts`], a signal-backed
//! queue rendered by `components::toast_host`.

use leptos::prelude::*;

/// Sink for transient, non-blocking user messages.
pub trait Notify {
    fn error(&self, message: &str);
    fn success(&self, message: &str);
}

/// Severity of a toast message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

/// A single queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Signal-backed toast queue, provided via context at the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self { items: RwSignal::new(Vec::new()), next_id: RwSignal::new(0) }
    }

    pub fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast { id, kind, message: message.to_owned() });
        });
    }

    /// Remove a toast once displayed (or expired).
    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    #[must_use]
    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Toasts {
    fn error(&self, message: &str) {
        log::warn!("{message}");
        self.push(ToastKind::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }
}
