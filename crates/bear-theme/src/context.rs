//! The theme context: active collection state and style propagation.
//!
//! [`ThemeContext`] is the single source of truth for which collection is
//! active and which theme belongs to it. It owns the [`StyleSink`] and is
//! the only writer to it.
//!
//! # Transitions
//!
//! Selecting a different collection:
//!
//! 1. resolves the new theme,
//! 2. builds one [`StylePatch`] that removes the previous theme's color
//!    properties, replaces the scope marker and sets the new color
//!    properties,
//! 3. hands the patch to the sink in a single call,
//! 4. publishes the new `(collection, theme)` pair and notifies subscribers.
//!
//! Selecting the active collection again does nothing observable.
//!
//! # Reading
//!
//! Consumers never hold the context itself. They read through a
//! [`ThemeReader`] (a weak handle) or through [`use_theme`] inside a scope
//! entered with [`ThemeContext::enter`]. Both fail with
//! [`ThemeError::ContextUnavailable`] once the context is torn down.
//!
//! # Example
//!
//! ```rust
//! use bear_theme::{Collection, MemorySink, ThemeContext};
//!
//! let mut ctx = ThemeContext::new(MemorySink::new());
//! let reader = ctx.reader();
//!
//! ctx.select_collection("ethereal").unwrap();
//! let snapshot = reader.read().unwrap();
//! assert_eq!(snapshot.collection, Collection::Ethereal);
//! assert_eq!(snapshot.theme.colors.accent, "#F0B9DD");
//!
//! ctx.teardown();
//! assert!(reader.read().is_err());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::collection::Collection;
use crate::error::ThemeError;
use crate::sink::{StylePatch, StyleSink};
use crate::stylesheet::{color_properties, color_variable_names};
use crate::theme::{resolve_collection, ThemeConfig};

/// The `(theme, activeCollection)` pair consumers read.
///
/// The theme is shared read-only; a later transition publishes a new
/// snapshot rather than changing this one.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSnapshot {
    pub collection: Collection,
    pub theme: Rc<ThemeConfig>,
}

type ActiveState = RefCell<Option<ThemeSnapshot>>;

/// Identifies a subscription for [`ThemeContext::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ThemeSnapshot)>;

/// Owner of the active collection and the style surface.
pub struct ThemeContext<S: StyleSink> {
    state: Rc<ActiveState>,
    sink: S,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: StyleSink> ThemeContext<S> {
    /// Creates a context on the default collection.
    ///
    /// The Primal theme is resolved and applied to the sink before this
    /// returns, so the first read already sees a complete theme.
    pub fn new(sink: S) -> Self {
        Self::with_collection(sink, Collection::default())
    }

    /// Creates a context on a given collection.
    pub fn with_collection(mut sink: S, collection: Collection) -> Self {
        let theme = resolve_collection(collection);
        sink.apply(&StylePatch {
            remove: Vec::new(),
            scope: Some(collection.scope_marker()),
            set: color_patch(&theme),
        });
        tracing::debug!(collection = collection.id(), "theme context created");

        Self {
            state: Rc::new(RefCell::new(Some(ThemeSnapshot {
                collection,
                theme: Rc::new(theme),
            }))),
            sink,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Selects a collection by identifier.
    ///
    /// Unknown identifiers select the default collection, exactly as
    /// [`resolve`](crate::resolve) does. Returns the collection now active.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ContextUnavailable`] after [`teardown`](Self::teardown).
    pub fn select_collection(&mut self, id: &str) -> Result<Collection, ThemeError> {
        let collection = Collection::from_id_or_default(id);
        self.select(collection)?;
        Ok(collection)
    }

    /// Selects a collection.
    ///
    /// A no-op if `collection` is already active.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ContextUnavailable`] after [`teardown`](Self::teardown).
    pub fn select(&mut self, collection: Collection) -> Result<(), ThemeError> {
        let previous = self.snapshot()?;
        if previous.collection == collection {
            tracing::debug!(collection = collection.id(), "collection already active");
            return Ok(());
        }

        let theme = resolve_collection(collection);
        let patch = StylePatch {
            remove: color_variable_names(),
            scope: Some(collection.scope_marker()),
            set: color_patch(&theme),
        };
        self.sink.apply(&patch);

        let snapshot = ThemeSnapshot {
            collection,
            theme: Rc::new(theme),
        };
        *self.state.borrow_mut() = Some(snapshot.clone());
        tracing::debug!(
            from = previous.collection.id(),
            to = collection.id(),
            "collection selected"
        );

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
        Ok(())
    }

    /// Returns the current `(collection, theme)` pair.
    pub fn snapshot(&self) -> Result<ThemeSnapshot, ThemeError> {
        read_state(&self.state)
    }

    /// Returns the active collection.
    pub fn active_collection(&self) -> Result<Collection, ThemeError> {
        Ok(self.snapshot()?.collection)
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Result<Rc<ThemeConfig>, ThemeError> {
        Ok(self.snapshot()?.theme)
    }

    /// Returns `true` until the context is torn down.
    pub fn is_active(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Returns a read-only handle for consumers.
    pub fn reader(&self) -> ThemeReader {
        ThemeReader {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Makes this context the one [`use_theme`] reads on the current thread
    /// until the returned guard is dropped.
    ///
    /// Scopes nest: the innermost entered context wins. Dropping a guard
    /// ends only its own scope, whatever order guards are dropped in.
    pub fn enter(&self) -> ScopeGuard {
        let reader = self.reader();
        let entry = reader.state.clone();
        SCOPE.with(|scope| scope.borrow_mut().push(reader));
        ScopeGuard {
            entry,
            _not_send: PhantomData,
        }
    }

    /// Registers a callback run after every completed transition.
    ///
    /// Callbacks are not run for no-op selections or on teardown.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ThemeSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Removes every applied custom property and clears the scope marker.
    ///
    /// Afterwards all reads and selections fail with
    /// [`ThemeError::ContextUnavailable`]. Calling this twice is harmless.
    pub fn teardown(&mut self) {
        let Some(previous) = self.state.borrow_mut().take() else {
            return;
        };
        self.sink.apply(&StylePatch {
            remove: color_variable_names(),
            scope: None,
            set: Vec::new(),
        });
        self.subscribers.clear();
        tracing::debug!(collection = previous.collection.id(), "theme context torn down");
    }

    /// Returns the sink, for inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: StyleSink> Drop for ThemeContext<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: StyleSink + fmt::Debug> fmt::Debug for ThemeContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("state", &self.state.borrow())
            .field("sink", &self.sink)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn color_patch(theme: &ThemeConfig) -> Vec<(String, String)> {
    color_properties(theme)
        .into_iter()
        .map(|property| (property.name, property.value))
        .collect()
}

fn read_state(state: &ActiveState) -> Result<ThemeSnapshot, ThemeError> {
    state.borrow().clone().ok_or(ThemeError::ContextUnavailable)
}

/// A weak, read-only handle to a [`ThemeContext`].
#[derive(Debug, Clone)]
pub struct ThemeReader {
    state: Weak<ActiveState>,
}

impl ThemeReader {
    /// Reads the current `(collection, theme)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ContextUnavailable`] if the context was torn
    /// down or dropped.
    pub fn read(&self) -> Result<ThemeSnapshot, ThemeError> {
        let state = self.state.upgrade().ok_or(ThemeError::ContextUnavailable)?;
        read_state(&state)
    }
}

thread_local! {
    static SCOPE: RefCell<Vec<ThemeReader>> = const { RefCell::new(Vec::new()) };
}

/// Keeps a context entered on the current thread. See [`ThemeContext::enter`].
#[must_use = "the scope ends when the guard is dropped"]
pub struct ScopeGuard {
    entry: Weak<ActiveState>,
    // Bound to the thread whose scope stack it pushed onto.
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPE.with(|scope| {
            let mut scope = scope.borrow_mut();
            if let Some(index) = scope
                .iter()
                .rposition(|reader| Weak::ptr_eq(&reader.state, &self.entry))
            {
                scope.remove(index);
            }
        });
    }
}

/// Reads the theme of the innermost entered context on this thread.
///
/// # Errors
///
/// Returns [`ThemeError::ContextUnavailable`] outside any entered scope, or
/// if the entered context has been torn down.
pub fn use_theme() -> Result<ThemeSnapshot, ThemeError> {
    let reader = SCOPE
        .with(|scope| scope.borrow().last().cloned())
        .ok_or(ThemeError::ContextUnavailable)?;
    reader.read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::cell::Cell;

    #[test]
    fn test_new_applies_primal() {
        let ctx = ThemeContext::new(MemorySink::new());
        assert_eq!(ctx.active_collection().unwrap(), Collection::Primal);
        assert_eq!(ctx.sink().scope_marker(), Some("collection-primal"));
        assert_eq!(ctx.sink().property("--color-primary"), Some("#2D1E0F"));
        assert_eq!(ctx.sink().properties().len(), 7);
        assert_eq!(ctx.sink().commits(), 1);
    }

    #[test]
    fn test_with_collection_starts_elsewhere() {
        let ctx = ThemeContext::with_collection(MemorySink::new(), Collection::Techno);
        assert_eq!(ctx.theme().unwrap().name, "Techno");
        assert_eq!(ctx.sink().scope_marker(), Some("collection-techno"));
    }

    #[test]
    fn test_select_is_single_commit() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        ctx.select(Collection::Techno).unwrap();
        assert_eq!(ctx.sink().commits(), 2);
        assert_eq!(ctx.sink().scope_marker(), Some("collection-techno"));
        assert_eq!(ctx.sink().property("--color-accent"), Some("#FFF500"));
    }

    #[test]
    fn test_select_same_collection_is_noop() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        let before = ctx.sink().clone();
        ctx.select(Collection::Primal).unwrap();
        assert_eq!(ctx.sink(), &before);
    }

    #[test]
    fn test_select_collection_returns_effective() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        assert_eq!(ctx.select_collection("techno").unwrap(), Collection::Techno);
        assert_eq!(ctx.select_collection("nope").unwrap(), Collection::Primal);
    }

    #[test]
    fn test_snapshot_theme_is_not_replaced_in_place() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        let old = ctx.snapshot().unwrap();
        ctx.select(Collection::Ethereal).unwrap();
        assert_eq!(old.theme.colors.primary, "#2D1E0F");
        assert_eq!(ctx.theme().unwrap().colors.primary, "#A7C5E1");
    }

    #[test]
    fn test_subscribers_notified_per_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = ThemeContext::new(MemorySink::new());
        let log = Rc::clone(&seen);
        ctx.subscribe(move |snapshot| log.borrow_mut().push(snapshot.collection));

        ctx.select(Collection::Techno).unwrap();
        ctx.select(Collection::Techno).unwrap();
        ctx.select(Collection::Ethereal).unwrap();

        assert_eq!(*seen.borrow(), vec![Collection::Techno, Collection::Ethereal]);
    }

    #[test]
    fn test_subscriber_sees_applied_state() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        let reader = ctx.reader();
        let matched = Rc::new(Cell::new(false));
        let flag = Rc::clone(&matched);
        ctx.subscribe(move |snapshot| {
            let read = reader.read().unwrap();
            flag.set(read == *snapshot);
        });
        ctx.select(Collection::Ethereal).unwrap();
        assert!(matched.get());
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(Cell::new(0));
        let mut ctx = ThemeContext::new(MemorySink::new());
        let counter = Rc::clone(&count);
        let id = ctx.subscribe(move |_| counter.set(counter.get() + 1));

        ctx.select(Collection::Techno).unwrap();
        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.select(Collection::Primal).unwrap();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_teardown_clears_surface() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        ctx.select(Collection::Techno).unwrap();
        ctx.teardown();

        assert!(ctx.sink().is_empty());
        assert!(!ctx.is_active());
        assert!(ctx.snapshot().unwrap_err().is_context_unavailable());
        assert!(ctx.select(Collection::Primal).is_err());
    }

    #[test]
    fn test_teardown_twice_is_harmless() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        ctx.teardown();
        let commits = ctx.sink().commits();
        ctx.teardown();
        assert_eq!(ctx.sink().commits(), commits);
    }

    #[test]
    fn test_drop_tears_down_borrowed_sink() {
        let mut sink = MemorySink::new();
        {
            let mut ctx = ThemeContext::new(&mut sink);
            ctx.select(Collection::Ethereal).unwrap();
        }
        assert!(sink.is_empty());
        assert_eq!(sink.commits(), 3);
    }

    #[test]
    fn test_reader_fails_after_drop() {
        let ctx = ThemeContext::new(MemorySink::new());
        let reader = ctx.reader();
        assert!(reader.read().is_ok());
        drop(ctx);
        assert!(reader.read().unwrap_err().is_context_unavailable());
    }

    #[test]
    fn test_use_theme_outside_scope_fails() {
        assert!(use_theme().unwrap_err().is_context_unavailable());
    }

    #[test]
    fn test_use_theme_inside_scope() {
        let mut ctx = ThemeContext::new(MemorySink::new());
        {
            let _guard = ctx.enter();
            assert_eq!(use_theme().unwrap().collection, Collection::Primal);
        }
        assert!(use_theme().is_err());

        ctx.select(Collection::Techno).unwrap();
        let _guard = ctx.enter();
        assert_eq!(use_theme().unwrap().collection, Collection::Techno);
    }

    #[test]
    fn test_use_theme_innermost_scope_wins() {
        let outer = ThemeContext::new(MemorySink::new());
        let inner = ThemeContext::with_collection(MemorySink::new(), Collection::Ethereal);

        let _outer_guard = outer.enter();
        {
            let _inner_guard = inner.enter();
            assert_eq!(use_theme().unwrap().collection, Collection::Ethereal);
        }
        assert_eq!(use_theme().unwrap().collection, Collection::Primal);
    }

    #[test]
    fn test_scope_guards_dropped_out_of_order() {
        let outer = ThemeContext::new(MemorySink::new());
        let inner = ThemeContext::with_collection(MemorySink::new(), Collection::Techno);

        let outer_guard = outer.enter();
        let inner_guard = inner.enter();
        drop(outer_guard);
        assert_eq!(use_theme().unwrap().collection, Collection::Techno);

        drop(inner_guard);
        assert!(use_theme().unwrap_err().is_context_unavailable());
    }

    #[test]
    fn test_same_context_entered_twice() {
        let ctx = ThemeContext::with_collection(MemorySink::new(), Collection::Ethereal);
        let first = ctx.enter();
        let second = ctx.enter();
        drop(first);
        assert_eq!(use_theme().unwrap().collection, Collection::Ethereal);
        drop(second);
        assert!(use_theme().is_err());
    }
}
