//! # Bear Theme - collection theming for the BEAR site
//!
//! The site's look follows the active product collection (Primal, Ethereal,
//! Techno). This crate resolves a collection into a full set of design
//! tokens and keeps the global style surface in step with the active
//! collection.
//!
//! ## Core Concepts
//!
//! - [`Collection`]: The closed set of collections, with Primal as default
//! - [`ThemeConfig`]: Base tokens merged with one collection's overrides
//! - [`resolve`]: Pure identifier-to-theme resolution with fallback
//! - [`ThemeContext`]: Owns the active collection and writes the style surface
//! - [`StyleSink`]: The narrow capability the context writes through
//!
//! ## Quick Start
//!
//! ```rust
//! use bear_theme::{Collection, MemorySink, ThemeContext};
//!
//! let mut ctx = ThemeContext::new(MemorySink::new());
//! assert_eq!(ctx.active_collection().unwrap(), Collection::Primal);
//!
//! ctx.select_collection("techno").unwrap();
//! assert_eq!(ctx.sink().scope_marker(), Some("collection-techno"));
//! assert_eq!(ctx.sink().property("--color-background"), Some("#0A0A14"));
//! ```
//!
//! ## Style Surface
//!
//! A context writes exactly two things: the scope marker `collection-<id>`
//! and the custom properties `--color-primary`, `--color-secondary`,
//! `--color-accent`, `--color-background`, `--color-surface`, `--color-text`
//! and `--color-textAlt`. Each transition reaches the sink as one
//! [`StylePatch`]. See [`stylesheet`] for static exports of the same names.

pub mod collection;
pub mod context;
mod error;
pub mod sink;
pub mod stylesheet;
pub mod theme;
mod util;

pub use collection::Collection;
pub use context::{use_theme, ScopeGuard, SubscriptionId, ThemeContext, ThemeReader, ThemeSnapshot};
pub use error::ThemeError;
pub use sink::{MemorySink, NullSink, StylePatch, StyleSink};
pub use stylesheet::{color_properties, color_variable, render_all, render_stylesheet, CustomProperty};
pub use theme::{resolve, resolve_collection, ThemeConfig};
pub use util::{parse_hex, rgb_to_ansi256, with_alpha};
