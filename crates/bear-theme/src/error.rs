//! Theme errors.

/// Error returned by theme parsing, context access and stylesheet export.
///
/// Unknown collection identifiers only surface here through strict parsing
/// ([`Collection::from_str`](std::str::FromStr)); the resolver itself falls
/// back to the default collection instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme was read (or a collection selected) outside a live
    /// [`ThemeContext`](crate::ThemeContext): the context was torn down,
    /// dropped, or never entered on this thread.
    #[error("theme context is not available: read outside an active theme context")]
    ContextUnavailable,

    /// The identifier does not name one of the known collections.
    #[error("unknown collection '{id}' (expected one of: primal, ethereal, techno)")]
    UnknownCollection { id: String },

    /// The stylesheet template failed to render.
    #[error("stylesheet rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

impl ThemeError {
    /// Returns `true` for the context-scope violation.
    pub fn is_context_unavailable(&self) -> bool {
        matches!(self, ThemeError::ContextUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_collection_display() {
        let err = ThemeError::UnknownCollection {
            id: "bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("primal, ethereal, techno"));
    }

    #[test]
    fn test_context_unavailable_predicate() {
        assert!(ThemeError::ContextUnavailable.is_context_unavailable());
        let err = ThemeError::UnknownCollection { id: "x".into() };
        assert!(!err.is_context_unavailable());
    }
}
