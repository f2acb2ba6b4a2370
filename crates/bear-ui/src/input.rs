//! Themed form input styles.

use bear_theme::{use_theme, with_alpha, Collection, ThemeConfig, ThemeError, ThemeSnapshot};
use serde::Serialize;

use crate::button::IconPosition;
use crate::motion::MotionTarget;
use crate::style::StyleMap;

/// Color used for validation errors. Themes carry no error color.
pub const ERROR_COLOR: &str = "#ff0000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Single-line field (`text`, `email`, `password`, ...).
    #[default]
    Field,
    Textarea,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputProps {
    pub kind: InputKind,
    pub has_error: bool,
    pub icon: Option<IconPosition>,
    pub full_width: bool,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            kind: InputKind::Field,
            has_error: false,
            icon: None,
            full_width: true,
        }
    }
}

impl InputProps {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn icon(mut self, position: IconPosition) -> Self {
        self.icon = Some(position);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }
}

/// Per-collection input treatment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInputStyle {
    pub border_width: &'static str,
    /// Overrides the theme's medium radius when set.
    pub border_radius: Option<String>,
    pub focus: MotionTarget,
}

/// Border width, radius and focus motion for inputs in a collection.
pub fn collection_input_style(collection: Collection, theme: &ThemeConfig) -> CollectionInputStyle {
    let accent = &theme.colors.accent;
    match collection {
        Collection::Primal => CollectionInputStyle {
            border_width: "2px",
            border_radius: None,
            focus: MotionTarget {
                border_color: Some(accent.clone()),
                transform: Some("translateY(-2px)".into()),
                ..Default::default()
            },
        },
        Collection::Ethereal => CollectionInputStyle {
            border_width: "1px",
            border_radius: Some(theme.border_radius.pill.clone()),
            focus: MotionTarget {
                box_shadow: Some(format!("0 0 0 2px {}", with_alpha(accent, "20"))),
                border_color: Some(accent.clone()),
                ..Default::default()
            },
        },
        Collection::Techno => CollectionInputStyle {
            border_width: "1px",
            border_radius: None,
            focus: MotionTarget {
                border_color: Some(accent.clone()),
                background_color: Some(with_alpha(&theme.colors.background, "90")),
                ..Default::default()
            },
        },
    }
}

/// Styles for every part of a labelled input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyle {
    pub container: StyleMap,
    pub label: StyleMap,
    pub required_marker: StyleMap,
    pub wrapper: StyleMap,
    /// Present only when the input has an icon.
    pub icon: Option<StyleMap>,
    pub field: StyleMap,
    pub focus: MotionTarget,
    pub error_text: StyleMap,
    pub help_text: StyleMap,
}

impl InputStyle {
    /// Derives the style from a snapshot.
    pub fn derive(snapshot: &ThemeSnapshot, props: InputProps) -> Self {
        let theme = &snapshot.theme;
        let spacing = &theme.spacing;
        let colors = &theme.colors;
        let treatment = collection_input_style(snapshot.collection, theme);

        let container = StyleMap::new()
            .set("display", "flex")
            .set("flex-direction", "column")
            .set("width", if props.full_width { "100%" } else { "auto" })
            .set("margin-bottom", spacing.md.as_str());

        let mut label = StyleMap::new()
            .set("margin-bottom", spacing.sm.as_str())
            .set("font-size", "0.875rem")
            .set("font-weight", "500")
            .set(
                "color",
                if props.has_error {
                    ERROR_COLOR
                } else {
                    colors.text.as_str()
                },
            );

        let wrapper = StyleMap::new()
            .set("position", "relative")
            .set("display", "flex")
            .set("align-items", "center");

        let icon = props.icon.map(|position| {
            let side = match position {
                IconPosition::Left => "left",
                IconPosition::Right => "right",
            };
            StyleMap::new()
                .set("position", "absolute")
                .set(side, spacing.sm.as_str())
                .set("color", colors.text_alt.as_str())
                .set("pointer-events", "none")
        });

        let icon_padding = format!("calc({} * 2 + 1rem)", spacing.md);
        let padding_for = |position: IconPosition| {
            if props.icon == Some(position) {
                icon_padding.clone()
            } else {
                spacing.md.clone()
            }
        };
        let border_color = if props.has_error {
            ERROR_COLOR
        } else {
            colors.text_alt.as_str()
        };

        let mut field = StyleMap::new()
            .set("width", "100%")
            .set("padding", format!("{} {}", spacing.sm, spacing.md))
            .set("padding-left", padding_for(IconPosition::Left))
            .set("padding-right", padding_for(IconPosition::Right))
            .set("background-color", colors.surface.as_str())
            .set("color", colors.text.as_str())
            .set(
                "border",
                format!("{} solid {}", treatment.border_width, border_color),
            )
            .set(
                "border-radius",
                treatment
                    .border_radius
                    .clone()
                    .unwrap_or_else(|| theme.border_radius.md.clone()),
            )
            .set("font-size", "1rem")
            .set("line-height", "1.5")
            .set("transition", theme.transitions.normal.as_str())
            .set("outline", "none")
            .set("appearance", "none");

        match props.kind {
            InputKind::Field => {}
            InputKind::Textarea => {
                field = field.set("min-height", "100px").set("resize", "vertical");
            }
            InputKind::Checkbox => {
                field = StyleMap::new()
                    .set("width", "1.25rem")
                    .set("height", "1.25rem")
                    .set("accent-color", colors.primary.as_str())
                    .set("cursor", "pointer");
                label.insert("margin-bottom", "0");
                label.insert("cursor", "pointer");
            }
        }

        Self {
            container,
            label,
            required_marker: StyleMap::new().set("color", ERROR_COLOR),
            wrapper,
            icon,
            field,
            focus: treatment.focus,
            error_text: StyleMap::new()
                .set("margin-top", spacing.xs.as_str())
                .set("color", ERROR_COLOR)
                .set("font-size", "0.75rem"),
            help_text: StyleMap::new()
                .set("margin-top", spacing.xs.as_str())
                .set("color", colors.text_alt.as_str())
                .set("font-size", "0.75rem"),
        }
    }

    /// Derives the style from the theme context entered on this thread.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ContextUnavailable`] outside a theme scope.
    pub fn current(props: InputProps) -> Result<Self, ThemeError> {
        Ok(Self::derive(&use_theme()?, props))
    }
}
