//! Theme tokens and resolution.
//!
//! This module provides:
//!
//! - [`ThemeConfig`]: The fully merged set of tokens for one collection
//! - [`BaseTokens`] and [`CollectionTheme`]: The two halves a theme is merged from
//! - [`resolve`] and [`resolve_collection`]: Pure resolution from a collection
//!   identifier to a fresh theme
//!
//! Resolution never touches the style surface; see [`crate::context`] for
//! how a resolved theme is applied.

mod config;
mod resolver;
mod tokens;

pub use config::ThemeConfig;
pub use resolver::{base_tokens, collection_theme, resolve, resolve_collection};
pub use tokens::{
    Animation, BaseTokens, BorderRadius, Breakpoints, CollectionTheme, Colors, Constants,
    CornerStyle, Imagery, Spacing, Transitions, Typography,
};
