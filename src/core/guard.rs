//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean functions that decide whether a
//! transition may fire. They read whatever external condition the caller
//! captured and are re-evaluated from scratch on every update cycle.

/// Predicate that decides whether a transition fires.
///
/// A guard closes over the caller's own condition sources (flags, counters,
/// clocks) and reports their state at the moment of the check. The engine
/// never caches a result: a guard that returned `false` on one update is
/// asked again on the next.
///
/// # Example
///
/// ```rust
/// use escapement::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let ready = Arc::new(AtomicBool::new(false));
/// let watched = Arc::clone(&ready);
/// let guard = Guard::new(move || watched.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// ready.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    ///
    /// The predicate must be thread-safe (`Send + Sync`); shared mutable
    /// inputs are usually captured through `Arc`-wrapped atomics or locks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use escapement::core::Guard;
    ///
    /// let always = Guard::new(|| true);
    /// assert!(always.check());
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate once and return its verdict.
    ///
    /// # Example
    ///
    /// ```rust
    /// use escapement::core::Guard;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counted = Arc::clone(&calls);
    /// let guard = Guard::new(move || counted.fetch_add(1, Ordering::SeqCst) >= 2);
    ///
    /// assert!(!guard.check());
    /// assert!(!guard.check());
    /// assert!(guard.check());
    /// ```
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}
