//! The layout shell around every page.
//!
//! - [`Route`]: Parsed site paths; collection routes carry their raw segment
//! - [`NavState`]: Mobile menu state, closed on every route change
//! - [`Shell`]: Session owner tying navigation to the theme context
//!
//! The shell is the routing collaborator of the theme context: it maps a
//! `/collection/<id>` path to a selection and leaves validation of `<id>`
//! to the resolver.

mod nav;
mod route;
mod shell;

pub use nav::{footer_collection_links, link_style, nav_items, NavItem, NavState};
pub use route::{collection_for_path, Route};
pub use shell::{footer_muted_style, footer_style, header_style, logo_style, main_style, Shell};
