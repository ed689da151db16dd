//! Session-scoped registry of background polling cleanups.
//!
//! DESIGN
//! ======
//! Long-lived polling loops (document vectorization progress, chat refresh)
//! register a cleanup callback here. When the session is invalidated by a
//! 401, the HTTP layer flushes the registry so no poller keeps hammering the
//! backend with a dead token. The registry is an explicit injectable service
//! created by the app root and handed to whoever needs it — there is no
//! ambient global.
//!
//! All mutation happens on the single UI thread. `flush_all` snapshots and
//! clears before invoking anything, so a second flush from a concurrent 401
//! burst is a no-op and every cleanup runs exactly once.

#[cfg(test)]
#[path = "polling_test.rs"]
mod polling_test;

use std::cell::RefCell;
use std::rc::Rc;

type Cleanup = Box<dyn FnOnce()>;

/// Ordered collection of zero-argument cleanup callbacks.
#[derive(Clone, Default)]
pub struct PollingRegistry {
    inner: Rc<RefCell<Vec<Cleanup>>>,
}

impl PollingRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cleanup to run on forced logout.
    pub fn register(&self, cleanup: impl FnOnce() + 'static) {
        self.inner.borrow_mut().push(Box::new(cleanup));
    }

    /// Invoke every registered cleanup exactly once and empty the registry.
    ///
    /// The snapshot-then-clear order keeps the registry consistent even if a
    /// cleanup re-enters the registry while running.
    pub fn flush_all(&self) {
        let callbacks: Vec<Cleanup> = self.inner.borrow_mut().drain(..).collect();
        for cleanup in callbacks {
            cleanup();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

/// Spawn a timer-driven polling loop and register its cancellation.
///
/// The tick future runs every `interval` until the registry is flushed.
#[cfg(feature = "hydrate")]
pub fn start_polling<F, Fut>(registry: &PollingRegistry, interval: std::time::Duration, mut tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let stopped = Rc::new(std::cell::Cell::new(false));
    {
        let stopped = Rc::clone(&stopped);
        registry.register(move || stopped.set(true));
    }
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(interval).await;
            if stopped.get() {
                break;
            }
            tick().await;
            if stopped.get() {
                break;
            }
        }
    });
}
