//! In-memory sinks.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::{StylePatch, StyleSink};

/// A style surface held in memory.
///
/// Mirrors what a document would carry: at most one scope marker and a map
/// of custom properties. Also counts how many patches it has received, which
/// makes no-op transitions observable in tests.
///
/// # Example
///
/// ```rust
/// use bear_theme::{MemorySink, ThemeContext};
///
/// let mut ctx = ThemeContext::new(MemorySink::new());
/// ctx.select_collection("techno").unwrap();
///
/// let sink = ctx.sink();
/// assert_eq!(sink.scope_marker(), Some("collection-techno"));
/// assert_eq!(sink.property("--color-primary"), Some("#00F0FF"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    scope: Option<String>,
    properties: BTreeMap<String, String>,
    commits: usize,
}

impl MemorySink {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scope marker.
    pub fn scope_marker(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the value of a custom property, if set.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns every custom property currently set, sorted by name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Returns `true` if no marker and no properties are set.
    pub fn is_empty(&self) -> bool {
        self.scope.is_none() && self.properties.is_empty()
    }

    /// Number of patches applied so far.
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Renders the surface as a CSS rule on `:root`.
    ///
    /// The marker is emitted as a leading comment so the output stays a
    /// valid style sheet.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if let Some(scope) = &self.scope {
            let _ = writeln!(out, "/* scope: {} */", scope);
        }
        out.push_str(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(out, "  {}: {};", name, value);
        }
        out.push_str("}\n");
        out
    }
}

impl StyleSink for MemorySink {
    fn apply(&mut self, patch: &StylePatch) {
        for name in &patch.remove {
            self.properties.remove(name);
        }
        self.scope = patch.scope.clone();
        for (name, value) in &patch.set {
            self.properties.insert(name.clone(), value.clone());
        }
        self.commits += 1;
    }
}

/// A sink that discards every patch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StyleSink for NullSink {
    fn apply(&mut self, _patch: &StylePatch) {}
}
