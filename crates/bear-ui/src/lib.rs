//! # Bear UI - themed presentation for the BEAR site
//!
//! Buttons, inputs and the layout shell, all derived from the active
//! collection's theme. Every component here is a pure reader: it takes a
//! [`ThemeSnapshot`](bear_theme::ThemeSnapshot) (or reads the entered scope
//! via `current`) and returns style declarations. None of them write to
//! the global style surface.
//!
//! ```rust
//! use bear_theme::{MemorySink, ThemeContext};
//! use bear_ui::{ButtonProps, ButtonStyle, ButtonVariant};
//!
//! let mut ctx = ThemeContext::new(MemorySink::new());
//! ctx.select_collection("ethereal").unwrap();
//!
//! let button = ButtonStyle::derive(
//!     &ctx.snapshot().unwrap(),
//!     ButtonProps::new(ButtonVariant::Secondary),
//! );
//! assert_eq!(button.style.get("border"), Some("2px solid #A7C5E1"));
//! ```

pub mod button;
pub mod input;
pub mod layout;
pub mod motion;
pub mod preview;
pub mod style;

pub use button::{button_motion, ButtonProps, ButtonSize, ButtonStyle, ButtonVariant, IconPosition};
pub use input::{collection_input_style, InputKind, InputProps, InputStyle, ERROR_COLOR};
pub use motion::{GestureMotion, MotionTarget, MotionTransition};
pub use style::StyleMap;
