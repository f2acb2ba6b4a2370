//! Themed button styles.
//!
//! A button's style is layered: base declarations, then the size table,
//! then the variant table. Hover motion comes from the active collection.

use bear_theme::theme::CornerStyle;
use bear_theme::{use_theme, Collection, ThemeConfig, ThemeError, ThemeSnapshot};
use serde::Serialize;

use crate::motion::{GestureMotion, MotionTarget, MotionTransition};
use crate::style::StyleMap;

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Which side of the label an icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub full_width: bool,
    pub icon: Option<IconPosition>,
}

impl ButtonProps {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn icon(mut self, position: IconPosition) -> Self {
        self.icon = Some(position);
        self
    }
}

/// Everything needed to render one button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    pub style: StyleMap,
    pub hover: StyleMap,
    pub motion: GestureMotion,
    /// Where the icon slot goes, if the button has one.
    pub icon: Option<IconPosition>,
}

impl ButtonStyle {
    /// Derives the style from a snapshot.
    pub fn derive(snapshot: &ThemeSnapshot, props: ButtonProps) -> Self {
        let theme = &snapshot.theme;
        let (variant_style, hover) = variant_table(theme, props.variant);
        let style = base_style(theme, props)
            .extend(size_table(theme, props.size))
            .extend(variant_style);

        Self {
            style,
            hover,
            motion: button_motion(snapshot.collection, theme),
            icon: props.icon,
        }
    }

    /// Derives the style from the theme context entered on this thread.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ContextUnavailable`] outside a theme scope.
    pub fn current(props: ButtonProps) -> Result<Self, ThemeError> {
        Ok(Self::derive(&use_theme()?, props))
    }
}

fn base_style(theme: &ThemeConfig, props: ButtonProps) -> StyleMap {
    let radius = match theme.imagery.corner_style {
        CornerStyle::Jagged => &theme.border_radius.none,
        CornerStyle::Rounded | CornerStyle::Pixel => &theme.border_radius.md,
    };

    StyleMap::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", theme.spacing.sm.as_str())
        .set("border-radius", radius.as_str())
        .set("font-weight", "600")
        .set("cursor", if props.disabled { "not-allowed" } else { "pointer" })
        .set("transition", theme.transitions.normal.as_str())
        .set("opacity", if props.disabled { "0.6" } else { "1" })
        .set("width", if props.full_width { "100%" } else { "auto" })
}

fn size_table(theme: &ThemeConfig, size: ButtonSize) -> StyleMap {
    let spacing = &theme.spacing;
    let (vertical, horizontal, font_size) = match size {
        ButtonSize::Small => (&spacing.xs, &spacing.md, "0.875rem"),
        ButtonSize::Medium => (&spacing.sm, &spacing.lg, "1rem"),
        ButtonSize::Large => (&spacing.md, &spacing.xl, "1.125rem"),
    };
    StyleMap::new()
        .set("padding", format!("{} {}", vertical, horizontal))
        .set("font-size", font_size)
}

fn variant_table(theme: &ThemeConfig, variant: ButtonVariant) -> (StyleMap, StyleMap) {
    let colors = &theme.colors;
    match variant {
        ButtonVariant::Primary => (
            StyleMap::new()
                .set("background-color", colors.primary.as_str())
                .set("color", colors.background.as_str())
                .set("border", "none"),
            StyleMap::new().set("background-color", colors.accent.as_str()),
        ),
        ButtonVariant::Secondary => (
            StyleMap::new()
                .set("background-color", "transparent")
                .set("color", colors.primary.as_str())
                .set("border", format!("2px solid {}", colors.primary)),
            StyleMap::new()
                .set("background-color", colors.primary.as_str())
                .set("color", colors.background.as_str()),
        ),
        ButtonVariant::Text => (
            StyleMap::new()
                .set("background-color", "transparent")
                .set("color", colors.text.as_str())
                .set("border", "none"),
            StyleMap::new().set("color", colors.accent.as_str()),
        ),
    }
}

/// Hover and tap motion for buttons in a collection.
pub fn button_motion(collection: Collection, theme: &ThemeConfig) -> GestureMotion {
    match collection {
        Collection::Primal => GestureMotion {
            while_hover: MotionTarget {
                scale: Some(1.05),
                transition: Some(MotionTransition::new(0.2)),
                ..Default::default()
            },
            while_tap: MotionTarget {
                scale: Some(0.95),
                ..Default::default()
            },
        },
        Collection::Ethereal => GestureMotion {
            while_hover: MotionTarget {
                y: Some(-5.0),
                box_shadow: Some("0 10px 15px -3px rgba(0, 0, 0, 0.1)".into()),
                transition: Some(MotionTransition::eased(0.3, "easeOut")),
                ..Default::default()
            },
            while_tap: MotionTarget {
                y: Some(0.0),
                box_shadow: Some("none".into()),
                ..Default::default()
            },
        },
        Collection::Techno => GestureMotion {
            while_hover: MotionTarget {
                background_color: Some(theme.colors.accent.clone()),
                color: Some(theme.colors.background.clone()),
                transition: Some(MotionTransition::new(0.2)),
                ..Default::default()
            },
            while_tap: MotionTarget {
                scale: Some(0.98),
                ..Default::default()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bear_theme::{MemorySink, ThemeContext};

    fn snapshot(collection: Collection) -> ThemeSnapshot {
        ThemeContext::with_collection(MemorySink::new(), collection)
            .snapshot()
            .unwrap()
    }

    #[test]
    fn test_primary_medium_defaults() {
        let button = ButtonStyle::derive(&snapshot(Collection::Primal), ButtonProps::default());
        assert_eq!(button.style.get("padding"), Some("8px 32px"));
        assert_eq!(button.style.get("font-size"), Some("1rem"));
        assert_eq!(button.style.get("background-color"), Some("#2D1E0F"));
        assert_eq!(button.style.get("color"), Some("#1A1A18"));
        assert_eq!(button.hover.get("background-color"), Some("#FF3A00"));
        assert_eq!(button.style.get("cursor"), Some("pointer"));
        assert_eq!(button.style.get("width"), Some("auto"));
    }

    #[test]
    fn test_jagged_corners_drop_radius() {
        let primal = ButtonStyle::derive(&snapshot(Collection::Primal), ButtonProps::default());
        let techno = ButtonStyle::derive(&snapshot(Collection::Techno), ButtonProps::default());
        assert_eq!(primal.style.get("border-radius"), Some("0"));
        assert_eq!(techno.style.get("border-radius"), Some("8px"));
    }

    #[test]
    fn test_sizes() {
        let snap = snapshot(Collection::Ethereal);
        let small = ButtonStyle::derive(&snap, ButtonProps::default().size(ButtonSize::Small));
        let large = ButtonStyle::derive(&snap, ButtonProps::default().size(ButtonSize::Large));
        assert_eq!(small.style.get("padding"), Some("4px 16px"));
        assert_eq!(small.style.get("font-size"), Some("0.875rem"));
        assert_eq!(large.style.get("padding"), Some("16px 64px"));
        assert_eq!(large.style.get("font-size"), Some("1.125rem"));
    }

    #[test]
    fn test_secondary_variant() {
        let button = ButtonStyle::derive(
            &snapshot(Collection::Ethereal),
            ButtonProps::new(ButtonVariant::Secondary),
        );
        assert_eq!(button.style.get("background-color"), Some("transparent"));
        assert_eq!(button.style.get("border"), Some("2px solid #A7C5E1"));
        assert_eq!(button.hover.get("color"), Some("#F5F9FF"));
    }

    #[test]
    fn test_text_variant() {
        let button = ButtonStyle::derive(
            &snapshot(Collection::Techno),
            ButtonProps::new(ButtonVariant::Text),
        );
        assert_eq!(button.style.get("color"), Some("#FFFFFF"));
        assert_eq!(button.hover.get("color"), Some("#FFF500"));
        assert_eq!(button.hover.get("background-color"), None);
    }

    #[test]
    fn test_disabled_full_width() {
        let button = ButtonStyle::derive(
            &snapshot(Collection::Primal),
            ButtonProps::default().disabled(true).full_width(true),
        );
        assert_eq!(button.style.get("cursor"), Some("not-allowed"));
        assert_eq!(button.style.get("opacity"), Some("0.6"));
        assert_eq!(button.style.get("width"), Some("100%"));
    }

    #[test]
    fn test_motion_per_collection() {
        let primal = snapshot(Collection::Primal);
        let motion = button_motion(primal.collection, &primal.theme);
        assert_eq!(motion.while_hover.scale, Some(1.05));
        assert_eq!(motion.while_tap.scale, Some(0.95));

        let ethereal = snapshot(Collection::Ethereal);
        let motion = button_motion(ethereal.collection, &ethereal.theme);
        assert_eq!(motion.while_hover.y, Some(-5.0));
        assert_eq!(
            motion.while_hover.transition,
            Some(MotionTransition::eased(0.3, "easeOut"))
        );

        let techno = snapshot(Collection::Techno);
        let motion = button_motion(techno.collection, &techno.theme);
        assert_eq!(motion.while_hover.background_color.as_deref(), Some("#FFF500"));
        assert_eq!(motion.while_hover.color.as_deref(), Some("#0A0A14"));
        assert_eq!(motion.while_tap.scale, Some(0.98));
    }

    #[test]
    fn test_current_requires_scope() {
        assert!(ButtonStyle::current(ButtonProps::default()).is_err());

        let ctx = ThemeContext::with_collection(MemorySink::new(), Collection::Techno);
        let _guard = ctx.enter();
        let button = ButtonStyle::current(ButtonProps::default()).unwrap();
        assert_eq!(button.style.get("background-color"), Some("#00F0FF"));
    }

    #[test]
    fn test_icon_slot() {
        let button = ButtonStyle::derive(
            &snapshot(Collection::Primal),
            ButtonProps::default().icon(IconPosition::Right),
        );
        assert_eq!(button.icon, Some(IconPosition::Right));
    }
}
