//! The fully merged theme.

use serde::{Deserialize, Serialize};

use super::tokens::{
    Animation, BaseTokens, BorderRadius, Breakpoints, CollectionTheme, Colors, Constants, Imagery,
    Spacing, Transitions, Typography,
};

/// Every token namespace active for one collection.
///
/// A `ThemeConfig` is the shallow merge of the shared [`BaseTokens`] and
/// exactly one [`CollectionTheme`]. All namespaces are required fields, so a
/// partially resolved theme cannot be constructed. Serializes with the
/// camelCase keys style sheets and scripts expect (`borderRadius`,
/// `textAlt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub name: String,
    pub font_family: String,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
    pub breakpoints: Breakpoints,
    pub transitions: Transitions,
    pub constants: Constants,
    pub colors: Colors,
    pub typography: Typography,
    pub animation: Animation,
    pub imagery: Imagery,
}

impl ThemeConfig {
    /// Merges base namespaces with a collection's override block.
    ///
    /// Collection namespaces replace same-named namespaces wholesale; there
    /// is no key-level merging inside a namespace.
    pub fn merge(base: BaseTokens, collection: CollectionTheme) -> Self {
        let BaseTokens {
            font_family,
            spacing,
            border_radius,
            breakpoints,
            transitions,
            constants,
        } = base;
        let CollectionTheme {
            name,
            colors,
            typography,
            animation,
            imagery,
        } = collection;

        Self {
            name,
            font_family,
            spacing,
            border_radius,
            breakpoints,
            transitions,
            constants,
            colors,
            typography,
            animation,
            imagery,
        }
    }

    /// Returns the base namespaces of this theme.
    pub fn base(&self) -> BaseTokens {
        BaseTokens {
            font_family: self.font_family.clone(),
            spacing: self.spacing.clone(),
            border_radius: self.border_radius.clone(),
            breakpoints: self.breakpoints.clone(),
            transitions: self.transitions.clone(),
            constants: self.constants.clone(),
        }
    }
}
