//! Site routes.

/// A parsed site path.
///
/// Collection routes keep the raw segment: validating it (and falling back
/// to the default collection) is the theme resolver's job, not the router's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Collection(String),
    Product(String),
    NotFound,
}

impl Route {
    /// Parses a path such as `/collection/techno`.
    ///
    /// Query strings and fragments are ignored; a trailing slash is allowed.
    ///
    /// ```rust
    /// use bear_ui::layout::Route;
    ///
    /// assert_eq!(Route::parse("/collection/techno/"), Route::Collection("techno".into()));
    /// assert_eq!(Route::parse("/product/42?size=m"), Route::Product("42".into()));
    /// assert_eq!(Route::parse("/collection"), Route::NotFound);
    /// ```
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["collection", id] => Route::Collection((*id).to_string()),
            ["product", id] => Route::Product((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    /// The collection segment, for collection routes.
    pub fn collection_segment(&self) -> Option<&str> {
        match self {
            Route::Collection(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Returns the collection segment of a collection path.
pub fn collection_for_path(path: &str) -> Option<String> {
    match Route::parse(path) {
        Route::Collection(id) => Some(id),
        _ => None,
    }
}
