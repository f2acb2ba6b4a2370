//! The page shell: header, main area, footer and route-driven selection.

use bear_theme::{Collection, StyleSink, ThemeConfig, ThemeContext, ThemeError, ThemeSnapshot};

use super::nav::NavState;
use super::route::Route;
use crate::style::StyleMap;

/// Owns the theme context and navigation state for one session.
///
/// Navigating to a collection route selects that collection; every other
/// route leaves the active collection alone.
///
/// ```rust
/// use bear_theme::{Collection, MemorySink};
/// use bear_ui::layout::Shell;
///
/// let mut shell = Shell::new(MemorySink::new(), "/");
/// shell.navigate("/collection/techno").unwrap();
/// assert_eq!(shell.snapshot().unwrap().collection, Collection::Techno);
///
/// shell.navigate("/about").unwrap();
/// assert_eq!(shell.snapshot().unwrap().collection, Collection::Techno);
/// ```
pub struct Shell<S: StyleSink> {
    context: ThemeContext<S>,
    nav: NavState,
}

impl<S: StyleSink> Shell<S> {
    /// Opens a session at `path`, selecting its collection if it has one.
    pub fn new(sink: S, path: &str) -> Self {
        let mut nav = NavState::new("/");
        let collection = nav
            .navigate(path)
            .collection_segment()
            .map(Collection::from_id_or_default)
            .unwrap_or_default();
        Self {
            context: ThemeContext::with_collection(sink, collection),
            nav,
        }
    }

    /// Handles a route change.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ContextUnavailable`] after [`close`](Self::close).
    pub fn navigate(&mut self, path: &str) -> Result<Route, ThemeError> {
        if !self.context.is_active() {
            return Err(ThemeError::ContextUnavailable);
        }
        let route = self.nav.navigate(path);
        if let Some(segment) = route.collection_segment() {
            let collection = self.context.select_collection(segment)?;
            tracing::debug!(path, collection = collection.id(), "collection route");
        }
        Ok(route)
    }

    pub fn snapshot(&self) -> Result<ThemeSnapshot, ThemeError> {
        self.context.snapshot()
    }

    pub fn active_collection(&self) -> Result<Collection, ThemeError> {
        self.context.active_collection()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavState {
        &mut self.nav
    }

    pub fn context(&self) -> &ThemeContext<S> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ThemeContext<S> {
        &mut self.context
    }

    /// Ends the session, removing everything written to the style surface.
    pub fn close(&mut self) {
        self.context.teardown();
    }
}

pub fn header_style(theme: &ThemeConfig) -> StyleMap {
    StyleMap::new()
        .set("height", theme.constants.header_height.as_str())
        .set("background-color", theme.colors.background.as_str())
        .set("border-bottom-color", theme.colors.surface.as_str())
        .set("transition", theme.transitions.normal.as_str())
}

/// Style of the wordmark in the header and footer.
pub fn logo_style(theme: &ThemeConfig) -> StyleMap {
    StyleMap::new().set("color", theme.colors.primary.as_str())
}

pub fn main_style(theme: &ThemeConfig) -> StyleMap {
    StyleMap::new().set("margin-top", theme.constants.header_height.as_str())
}

pub fn footer_style(theme: &ThemeConfig) -> StyleMap {
    StyleMap::new()
        .set("background-color", theme.colors.background.as_str())
        .set("color", theme.colors.text.as_str())
        .set("border-top-color", theme.colors.surface.as_str())
        .set("max-width", theme.constants.max_width.as_str())
}

/// Style of secondary footer text (links, address, copyright).
pub fn footer_muted_style(theme: &ThemeConfig) -> StyleMap {
    StyleMap::new().set("color", theme.colors.text_alt.as_str())
}
