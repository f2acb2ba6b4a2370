//! The global style surface and the only way to write to it.
//!
//! External style sheets select collection rules through two pieces of
//! global state: a style-scope marker (e.g. the `collection-techno` class on
//! the document body) and a set of CSS custom properties on the document
//! root. A [`StyleSink`] is the narrow capability that writes both.
//!
//! Writes are batched into a [`StylePatch`] and delivered in a single
//! [`StyleSink::apply`] call, so a sink never observes a half-applied theme:
//! the marker and the properties change together.
//!
//! Sinks provided here:
//!
//! - [`MemorySink`]: Keeps the surface in memory; renders it as CSS
//! - [`NullSink`]: Discards every patch

mod memory;

pub use memory::{MemorySink, NullSink};

/// One atomic batch of style-surface writes.
///
/// Sinks must process the fields in order: removals, then the scope marker,
/// then property sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    /// Custom property names to remove.
    pub remove: Vec<String>,
    /// Replacement scope marker, or `None` to clear it.
    pub scope: Option<String>,
    /// Custom properties to set, as `(name, value)` pairs.
    pub set: Vec<(String, String)>,
}

/// Receiver of style-surface writes.
///
/// A theme context owns its sink and is the single writer to it.
pub trait StyleSink {
    /// Applies a patch in full.
    fn apply(&mut self, patch: &StylePatch);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn apply(&mut self, patch: &StylePatch) {
        (**self).apply(patch)
    }
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn apply(&mut self, patch: &StylePatch) {
        (**self).apply(patch)
    }
}
