//! Static route table driving layout navigation.
//!
//! Supplied to the layout projections read-only; only entries carrying
//! layout metadata contribute sidebar links.

/// The landing page path.
pub const HOME_PATH: &str = "/";

/// Per-route layout metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Layout the route renders in; routes without one do not appear in
    /// the sidebar.
    pub layout: Option<&'static str>,
    /// Navigation label for the route.
    pub title: Option<&'static str>,
}

impl RouteMeta {
    /// Metadata with neither layout nor title.
    pub const NONE: Self = Self {
        layout: None,
        title: None,
    };
}

/// A single entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Client-side path.
    pub path: &'static str,
    /// Layout metadata.
    pub meta: RouteMeta,
}

/// The storefront route table, in navigation order.
const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        meta: RouteMeta {
            layout: Some("main"),
            title: Some("Catalog"),
        },
    },
    RouteEntry {
        path: "/cart",
        meta: RouteMeta::NONE,
    },
    RouteEntry {
        path: "/login",
        meta: RouteMeta::NONE,
    },
    RouteEntry {
        path: "/orders",
        meta: RouteMeta {
            layout: Some("main"),
            title: Some("Order history"),
        },
    },
    RouteEntry {
        path: "/profile",
        meta: RouteMeta {
            layout: Some("main"),
            title: Some("My profile"),
        },
    },
];

/// The storefront route table.
#[must_use]
pub const fn routes() -> &'static [RouteEntry] {
    ROUTES
}
