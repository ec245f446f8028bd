// Sidebar navigation
// Fixed, ordered list of links rendered next to every dashboard page

use maud::{html, Markup};
use pressroom_router::{RouteMatch, Router};

use crate::views::View;

/// A sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar entries, in display order
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Dashboard", path: "/" },
    NavLink { label: "Products", path: "/products" },
    NavLink { label: "Orders", path: "/orders" },
    NavLink { label: "Analytics", path: "/analytics" },
    NavLink { label: "Settings", path: "/settings" },
];

impl NavLink {
    /// Whether this link points at the currently resolved route
    pub fn is_active(&self, router: &Router<View>, active: Option<&RouteMatch<'_, View>>) -> bool {
        let Some(active) = active else {
            return false;
        };

        router
            .resolve(&router.href(self.path))
            .is_some_and(|target| target.is_same_as(active))
    }
}

/// Renders the sidebar, marking the entry for the active route
pub fn render(router: &Router<View>, active: Option<&RouteMatch<'_, View>>) -> Markup {
    html! {
        nav.sidebar {
            ul.nav.flex-column {
                @for link in &NAV_LINKS {
                    li.nav-item {
                        @if link.is_active(router, active) {
                            a.nav-link.active href=(router.href(link.path)) aria-current="page" {
                                (link.label)
                            }
                        } @else {
                            a.nav-link href=(router.href(link.path)) { (link.label) }
                        }
                    }
                }
            }
        }
    }
}
