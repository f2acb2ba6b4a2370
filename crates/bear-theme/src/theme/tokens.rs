//! Design token namespaces.
//!
//! Tokens fall into two groups:
//!
//! - **Base namespaces** ([`BaseTokens`]): spacing, radii, breakpoints,
//!   transitions and layout constants. Shared by every collection.
//! - **Collection namespaces** ([`CollectionTheme`]): name, colors,
//!   typography, animation and imagery. Each collection supplies all of them.
//!
//! All values are owned, so cloning a namespace never shares state.

use serde::{Deserialize, Serialize};

/// Spacing scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

/// Named corner radii.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub pill: String,
}

/// Responsive breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

/// Named CSS transition shorthands (duration plus easing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transitions {
    pub fast: String,
    pub normal: String,
    pub slow: String,
    pub intensity: String,
}

/// Layout dimensions that stay fixed across collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constants {
    pub header_height: String,
    pub footer_height: String,
    pub max_width: String,
}

/// Collection palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_alt: String,
}

impl Colors {
    /// Palette keys in declaration order, spelled as they appear in
    /// serialized themes and CSS variable names.
    pub const KEYS: [&'static str; 7] = [
        "primary",
        "secondary",
        "accent",
        "background",
        "surface",
        "text",
        "textAlt",
    ];

    /// Returns `(key, value)` pairs in [`Colors::KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("textAlt", self.text_alt.as_str()),
        ]
    }

    /// Looks up a color by its serialized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// Font weights and line height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_weight: u16,
    pub body_weight: u16,
    pub line_height: f64,
}

/// Motion preset identifiers consumed by the animation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub hero_motion: String,
    pub page_transition: String,
    pub button_hover: String,
}

/// Corner treatment for imagery and controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    Jagged,
    Rounded,
    Pixel,
}

/// Image treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Imagery {
    /// CSS `filter` value applied to imagery.
    pub filter: String,
    pub corner_style: CornerStyle,
    /// Decorative element tags, e.g. `claw-marks`.
    pub decorative_elements: Vec<String>,
}

/// Namespaces shared by all collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTokens {
    pub font_family: String,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
    pub breakpoints: Breakpoints,
    pub transitions: Transitions,
    pub constants: Constants,
}

/// One collection's override block.
///
/// A block must be complete: nothing missing here is backfilled from the
/// base or from another collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionTheme {
    pub name: String,
    pub colors: Colors,
    pub typography: Typography,
    pub animation: Animation,
    pub imagery: Imagery,
}
