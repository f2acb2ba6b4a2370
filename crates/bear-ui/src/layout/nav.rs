//! Navigation items and menu state.

use bear_theme::{Collection, ThemeConfig};
use serde::Serialize;

use super::route::Route;
use crate::style::StyleMap;

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub path: String,
}

/// Header navigation, in display order.
pub fn nav_items() -> Vec<NavItem> {
    let mut items = vec![NavItem {
        name: "Home",
        path: "/".into(),
    }];
    items.extend(Collection::ALL.iter().map(|c| NavItem {
        name: c.display_name(),
        path: c.route(),
    }));
    items.push(NavItem {
        name: "About",
        path: "/about".into(),
    });
    items
}

/// Footer collection links: `(title, path)`.
pub fn footer_collection_links() -> Vec<(&'static str, String)> {
    Collection::ALL.iter().map(|c| (c.title(), c.route())).collect()
}

/// Style of a header link. The link for the current path is accented.
pub fn link_style(theme: &ThemeConfig, item: &NavItem, current_path: &str) -> StyleMap {
    let active = item.path == current_path;
    StyleMap::new()
        .set(
            "color",
            if active {
                theme.colors.accent.as_str()
            } else {
                theme.colors.text.as_str()
            },
        )
        .set("font-weight", if active { "bold" } else { "normal" })
        .set("transition", theme.transitions.fast.as_str())
}

/// Mobile menu state for the layout shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    path: String,
}

impl NavState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            menu_open: false,
            path: path.into(),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Label for the menu toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Records a route change. The menu always closes.
    pub fn navigate(&mut self, path: impl Into<String>) -> Route {
        self.path = path.into();
        self.menu_open = false;
        Route::parse(&self.path)
    }

    /// Styles for the three bars of the menu toggle.
    ///
    /// When open, the outer bars rotate into a cross and the middle one
    /// fades out.
    pub fn toggle_bars(&self, theme: &ThemeConfig) -> [StyleMap; 3] {
        let bar = || {
            StyleMap::new()
                .set("background-color", theme.colors.text.as_str())
                .set("transition", theme.transitions.fast.as_str())
        };
        if self.menu_open {
            [
                bar().set("transform", "rotate(45deg) translate(5px, 5px)"),
                bar().set("opacity", "0"),
                bar().set("transform", "rotate(-45deg) translate(7px, -7px)"),
            ]
        } else {
            [
                bar().set("transform", "none"),
                bar().set("opacity", "1"),
                bar().set("transform", "none"),
            ]
        }
    }

    /// Style of the sliding mobile menu.
    pub fn mobile_menu_style(&self, theme: &ThemeConfig) -> StyleMap {
        StyleMap::new()
            .set("background-color", theme.colors.background.as_str())
            .set("top", theme.constants.header_height.as_str())
            .set(
                "transform",
                if self.menu_open {
                    "translateX(0%)"
                } else {
                    "translateX(100%)"
                },
            )
            .set("transition", "transform 0.3s")
    }
}
