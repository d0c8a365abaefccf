//! Sidebar navigation projection.

use crate::routes::RouteEntry;

/// A rendered sidebar navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    /// Path the link navigates to.
    pub path: &'static str,
    /// Visible label, from the route's title metadata.
    pub title: &'static str,
    /// Whether the link points at the current path (styling only).
    pub active: bool,
}

/// Project the route table into sidebar links.
///
/// The result is the order-preserving filter of `routes` to entries whose
/// layout metadata is present, one link per survivor labeled by its title.
/// `current_path` only marks the active link; it never changes the set.
/// Recomputed on every call - nothing is cached.
#[must_use]
pub fn sidebar_links(routes: &[RouteEntry], current_path: &str) -> Vec<SidebarLink> {
    routes
        .iter()
        .filter(|entry| entry.meta.layout.is_some())
        .map(|entry| SidebarLink {
            path: entry.path,
            title: entry.meta.title.unwrap_or_default(),
            active: entry.path == current_path,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{self, RouteMeta};

    #[test]
    fn links_are_the_filtered_route_table_in_order() {
        let links = sidebar_links(routes::routes(), "/orders");

        let expected: Vec<&str> = routes::routes()
            .iter()
            .filter(|entry| entry.meta.layout.is_some())
            .filter_map(|entry| entry.meta.title)
            .collect();
        let titles: Vec<&str> = links.iter().map(|link| link.title).collect();

        assert_eq!(titles, expected);
    }

    #[test]
    fn routes_without_layout_metadata_are_excluded() {
        let table = [
            RouteEntry {
                path: "/a",
                meta: RouteMeta {
                    layout: Some("main"),
                    title: Some("A"),
                },
            },
            RouteEntry {
                path: "/b",
                // A title alone does not make a sidebar entry.
                meta: RouteMeta {
                    layout: None,
                    title: Some("B"),
                },
            },
            RouteEntry {
                path: "/c",
                meta: RouteMeta {
                    layout: Some("main"),
                    title: Some("C"),
                },
            },
        ];

        let links = sidebar_links(&table, "/");
        let paths: Vec<&str> = links.iter().map(|link| link.path).collect();
        assert_eq!(paths, ["/a", "/c"]);
    }

    #[test]
    fn current_path_marks_exactly_the_matching_link_active() {
        let links = sidebar_links(routes::routes(), "/orders");

        let active: Vec<&str> = links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.path)
            .collect();
        assert_eq!(active, ["/orders"]);
    }

    #[test]
    fn unknown_current_path_leaves_every_link_inactive() {
        let links = sidebar_links(routes::routes(), "/checkout/done");
        assert!(links.iter().all(|link| !link.active));
    }
}
