//! Mapping of query types to API paths.

/// Query types the widget knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Live stream search, `kraken/search/streams`.
    Search,
}

impl Route {
    /// Resolves a query-type key such as `"search"`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "search" => Some(Self::Search),
            _ => None,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Search => "kraken/search/streams",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lookup() {
        assert_eq!(Route::from_key("search"), Some(Route::Search));
        assert_eq!(Route::from_key("Search"), None);
        assert_eq!(Route::Search.path(), "kraken/search/streams");
    }
}
