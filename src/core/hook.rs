//! Lifecycle callbacks attached to registered states.
//!
//! Each state carries up to three hooks. The engine fires `on_enter` when the
//! state becomes current, `on_update` once per update cycle while it stays
//! current, and `on_leave` just before a transition moves away from it.

/// Boxed callback stored for a lifecycle event.
pub type Hook = Box<dyn Fn() + Send + Sync>;

/// The optional lifecycle callbacks of a single state.
///
/// Every hook slot defaults to empty; an absent hook is skipped silently.
/// Hooks are plain side-effecting closures and get no arguments, so anything
/// they observe or mutate must be captured at construction time.
///
/// # Example
///
/// ```rust
/// use escapement::core::StateHooks;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let entries = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&entries);
/// let hooks = StateHooks::new()
///     .on_enter(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     })
///     .on_update(|| println!("still here"));
/// # let _ = hooks;
/// ```
#[derive(Default)]
pub struct StateHooks {
    on_enter: Option<Hook>,
    on_update: Option<Hook>,
    on_leave: Option<Hook>,
}

impl StateHooks {
    /// Create an empty hook bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback fired when the state becomes current.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Set the callback fired once per update cycle while the state is
    /// current.
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Set the callback fired just before a transition leaves the state.
    pub fn on_leave<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_leave = Some(Box::new(hook));
        self
    }

    pub(crate) fn enter(&self) {
        if let Some(hook) = &self.on_enter {
            hook();
        }
    }

    pub(crate) fn update(&self) {
        if let Some(hook) = &self.on_update {
            hook();
        }
    }

    pub(crate) fn leave(&self) {
        if let Some(hook) = &self.on_leave {
            hook();
        }
    }
}
