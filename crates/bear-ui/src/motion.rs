//! Interaction motion targets handed to the animation layer.

use serde::Serialize;

/// Timing for a motion target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionTransition {
    /// Duration in seconds.
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
}

impl MotionTransition {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ease: None,
        }
    }

    pub fn eased(duration: f64, ease: &'static str) -> Self {
        Self {
            duration,
            ease: Some(ease),
        }
    }
}

/// Values an element animates towards while a gesture is active.
///
/// Unset fields are left alone by the animation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<MotionTransition>,
}

/// Hover and tap targets for a control.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureMotion {
    pub while_hover: MotionTarget,
    pub while_tap: MotionTarget,
}
