//! Inline style declarations.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered list of CSS declarations, as a component would pass inline.
///
/// Later inserts of the same property replace the earlier value in place,
/// which mirrors how object spreads layer size and variant tables over the
/// base style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    declarations: Vec<(&'static str, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the map for chaining.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property in place.
    pub fn insert(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Layers every declaration of `other` over this map.
    pub fn extend(mut self, other: StyleMap) -> Self {
        for (property, value) in other.declarations {
            self.insert(property, value);
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

/// Renders as an inline `style` attribute value.
impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let style = StyleMap::new()
            .set("color", "red")
            .set("padding", "4px")
            .set("color", "blue");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.iter().next(), Some(("color", "blue")));
    }

    #[test]
    fn test_extend_layers_over() {
        let base = StyleMap::new().set("border", "none").set("width", "auto");
        let variant = StyleMap::new().set("border", "2px solid #000");
        let merged = base.extend(variant);
        assert_eq!(merged.get("border"), Some("2px solid #000"));
        assert_eq!(merged.get("width"), Some("auto"));
    }

    #[test]
    fn test_display_inline() {
        let style = StyleMap::new().set("color", "#fff").set("opacity", "1");
        assert_eq!(style.to_string(), "color: #fff; opacity: 1;");
        assert_eq!(StyleMap::new().to_string(), "");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let style = StyleMap::new().set("z-index", "1").set("a", "2");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"z-index":"1","a":"2"}"#);
    }
}
