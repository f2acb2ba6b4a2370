//! Collection identifier to theme resolution.
//!
//! The token tables are built once, on first use, and never handed out by
//! reference: every resolution clones them into a fresh [`ThemeConfig`].
//! Two themes resolved for the same collection are equal but share nothing,
//! so memoizing by collection is safe for callers that want it.

use once_cell::sync::Lazy;

use super::config::ThemeConfig;
use super::tokens::{
    Animation, BaseTokens, BorderRadius, Breakpoints, CollectionTheme, Colors, Constants,
    CornerStyle, Imagery, Spacing, Transitions, Typography,
};
use crate::collection::Collection;

static BASE_TOKENS: Lazy<BaseTokens> = Lazy::new(|| BaseTokens {
    font_family: "'Monument Extended', sans-serif".into(),
    spacing: Spacing {
        xs: "4px".into(),
        sm: "8px".into(),
        md: "16px".into(),
        lg: "32px".into(),
        xl: "64px".into(),
    },
    border_radius: BorderRadius {
        none: "0".into(),
        sm: "4px".into(),
        md: "8px".into(),
        lg: "16px".into(),
        pill: "9999px".into(),
    },
    breakpoints: Breakpoints {
        sm: "640px".into(),
        md: "768px".into(),
        lg: "1024px".into(),
        xl: "1280px".into(),
    },
    transitions: Transitions {
        fast: "0.2s ease".into(),
        normal: "0.3s ease-in-out".into(),
        slow: "0.6s cubic-bezier(0.16, 1, 0.3, 1)".into(),
        intensity: "0.4s cubic-bezier(0.85, 0, 0.15, 1)".into(),
    },
    constants: Constants {
        header_height: "80px".into(),
        footer_height: "300px".into(),
        max_width: "1440px".into(),
    },
});

static PRIMAL: Lazy<CollectionTheme> = Lazy::new(|| CollectionTheme {
    name: Collection::Primal.display_name().into(),
    colors: palette([
        "#2D1E0F", // deep earth brown
        "#D66F00", // burnt orange
        "#FF3A00", // red-orange
        "#1A1A18", // nearly black
        "#2A2A28",
        "#F5F5F0",
        "#BFB5A3",
    ]),
    typography: Typography {
        heading_weight: 900,
        body_weight: 400,
        line_height: 1.2,
    },
    animation: motion("earthquake", "slash", "growl"),
    imagery: Imagery {
        filter: "contrast(1.2) saturate(0.9)".into(),
        corner_style: CornerStyle::Jagged,
        decorative_elements: vec!["claw-marks".into(), "torn-edges".into()],
    },
});

static ETHEREAL: Lazy<CollectionTheme> = Lazy::new(|| CollectionTheme {
    name: Collection::Ethereal.display_name().into(),
    colors: palette([
        "#A7C5E1", "#CEC5F2", "#F0B9DD", "#F5F9FF", "#FFFFFF", "#242B38", "#6F7C94",
    ]),
    typography: Typography {
        heading_weight: 300,
        body_weight: 300,
        line_height: 1.5,
    },
    animation: motion("float", "dissolve", "glow"),
    imagery: Imagery {
        filter: "brightness(1.05) saturate(0.95)".into(),
        corner_style: CornerStyle::Rounded,
        decorative_elements: vec!["mist".into(), "sparkles".into()],
    },
});

static TECHNO: Lazy<CollectionTheme> = Lazy::new(|| CollectionTheme {
    name: Collection::Techno.display_name().into(),
    colors: palette([
        "#00F0FF", "#FF00CA", "#FFF500", "#0A0A14", "#1A1A28", "#FFFFFF", "#9595B5",
    ]),
    typography: Typography {
        heading_weight: 700,
        body_weight: 400,
        line_height: 1.3,
    },
    animation: motion("glitch", "scan", "pulse"),
    imagery: Imagery {
        filter: "contrast(1.1) brightness(1.1)".into(),
        corner_style: CornerStyle::Pixel,
        decorative_elements: vec!["circuit-lines".into(), "data-points".into()],
    },
});

fn palette([primary, secondary, accent, background, surface, text, text_alt]: [&str; 7]) -> Colors {
    Colors {
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
        background: background.into(),
        surface: surface.into(),
        text: text.into(),
        text_alt: text_alt.into(),
    }
}

fn motion(hero: &str, page: &str, button: &str) -> Animation {
    Animation {
        hero_motion: hero.into(),
        page_transition: page.into(),
        button_hover: button.into(),
    }
}

/// Returns a copy of the shared base namespaces.
pub fn base_tokens() -> BaseTokens {
    BASE_TOKENS.clone()
}

/// Returns a copy of a collection's override block.
pub fn collection_theme(collection: Collection) -> CollectionTheme {
    let table: &CollectionTheme = match collection {
        Collection::Primal => &*PRIMAL,
        Collection::Ethereal => &*ETHEREAL,
        Collection::Techno => &*TECHNO,
    };
    table.clone()
}

/// Resolves the theme for a known collection.
pub fn resolve_collection(collection: Collection) -> ThemeConfig {
    ThemeConfig::merge(base_tokens(), collection_theme(collection))
}

/// Resolves the theme for an arbitrary identifier.
///
/// Identifiers outside `primal`, `ethereal` and `techno` resolve to the
/// Primal theme. This never fails.
///
/// # Example
///
/// ```rust
/// use bear_theme::resolve;
///
/// let theme = resolve("ethereal");
/// assert_eq!(theme.colors.primary, "#A7C5E1");
///
/// // Unknown identifiers fall back to Primal
/// assert_eq!(resolve("bogus"), resolve("primal"));
/// ```
pub fn resolve(id: &str) -> ThemeConfig {
    resolve_collection(Collection::from_id_or_default(id))
}
