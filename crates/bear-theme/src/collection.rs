//! The closed set of product collections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A product collection, each with its own visual and motion identity.
///
/// This is the single place where collection identifiers are mapped. Every
/// per-collection table in the workspace matches on this enum exhaustively,
/// so adding a collection is a compile error until each table handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Raw, earthy aesthetics. The default collection.
    #[default]
    Primal,
    /// Fluid, dreamy aesthetics.
    Ethereal,
    /// Futuristic, edgy aesthetics.
    Techno,
}

impl Collection {
    /// All collections, in navigation order.
    pub const ALL: [Collection; 3] = [Collection::Primal, Collection::Ethereal, Collection::Techno];

    /// Returns the identifier used in routes and style-scope markers.
    pub fn id(self) -> &'static str {
        match self {
            Collection::Primal => "primal",
            Collection::Ethereal => "ethereal",
            Collection::Techno => "techno",
        }
    }

    /// Returns the short display name carried in the theme's `name`.
    pub fn display_name(self) -> &'static str {
        match self {
            Collection::Primal => "Primal",
            Collection::Ethereal => "Ethereal",
            Collection::Techno => "Techno",
        }
    }

    /// Returns the marketing title shown in the footer.
    pub fn title(self) -> &'static str {
        match self {
            Collection::Primal => "Primal Instinct",
            Collection::Ethereal => "Ethereal Dream",
            Collection::Techno => "Techno Future",
        }
    }

    /// Returns the style-scope marker, e.g. `collection-primal`.
    pub fn scope_marker(self) -> String {
        format!("collection-{}", self.id())
    }

    /// Returns the route path of the collection page, e.g. `/collection/techno`.
    pub fn route(self) -> String {
        format!("/collection/{}", self.id())
    }

    /// Maps an identifier to a collection, falling back to the default.
    ///
    /// Matching is exact and case-sensitive. Unknown identifiers are not an
    /// error: they resolve to [`Collection::Primal`] and a warning is logged.
    pub fn from_id_or_default(id: &str) -> Collection {
        match id.parse() {
            Ok(collection) => collection,
            Err(_) => {
                tracing::warn!(
                    id,
                    fallback = Collection::default().id(),
                    "unknown collection identifier, using default"
                );
                Collection::default()
            }
        }
    }
}

impl FromStr for Collection {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primal" => Ok(Collection::Primal),
            "ethereal" => Ok(Collection::Ethereal),
            "techno" => Ok(Collection::Techno),
            _ => Err(ThemeError::UnknownCollection { id: s.to_string() }),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_primal() {
        assert_eq!(Collection::default(), Collection::Primal);
    }

    #[test]
    fn test_parse_known_ids() {
        for collection in Collection::ALL {
            assert_eq!(collection.id().parse::<Collection>().unwrap(), collection);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Primal".parse::<Collection>().is_err());
        assert!("TECHNO".parse::<Collection>().is_err());
    }

    #[test]
    fn test_parse_unknown_reports_id() {
        match "bogus".parse::<Collection>() {
            Err(ThemeError::UnknownCollection { id }) => assert_eq!(id, "bogus"),
            other => panic!("expected UnknownCollection, got {:?}", other),
        }
    }

    #[test]
    fn test_from_id_or_default_falls_back() {
        assert_eq!(Collection::from_id_or_default("ethereal"), Collection::Ethereal);
        assert_eq!(Collection::from_id_or_default("bogus"), Collection::Primal);
        assert_eq!(Collection::from_id_or_default(""), Collection::Primal);
    }

    #[test]
    fn test_scope_marker_and_route() {
        assert_eq!(Collection::Ethereal.scope_marker(), "collection-ethereal");
        assert_eq!(Collection::Techno.route(), "/collection/techno");
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Collection::Techno).unwrap();
        assert_eq!(json, "\"techno\"");
        let back: Collection = serde_json::from_str("\"ethereal\"").unwrap();
        assert_eq!(back, Collection::Ethereal);
    }
}
