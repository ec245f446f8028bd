// Dashboard layout
// Two-column page: sidebar on the left, navbar + content + footer on the right

use maud::{html, Markup, PreEscaped, DOCTYPE};
use pressroom_router::{RouteMatch, Router};

use crate::sidebar;
use crate::views::View;

pub const STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

const INLINE_STYLE: &str = "
    .sidebar { width: 220px; min-height: 100vh; background: #212529; padding: 1rem 0; }
    .sidebar .nav-link { color: #adb5bd; }
    .sidebar .nav-link.active { color: #fff; font-weight: 600; }
";

/// Slots for the dashboard layout
pub struct Slots<'a> {
    /// Page title (required)
    pub title: &'a str,
    /// Match that produced the content, if any; drives the active sidebar entry
    pub active: Option<&'a RouteMatch<'a, View>>,
}

impl<'a> Slots<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            active: None,
        }
    }

    pub fn active(mut self, active: Option<&'a RouteMatch<'a, View>>) -> Self {
        self.active = active;
        self
    }
}

/// Wraps page content in the full dashboard document
pub fn layout(router: &Router<View>, content: Markup, slots: Slots<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (slots.title) " - Pressroom Admin" }
                link rel="stylesheet" href=(STYLESHEET);
                style { (PreEscaped(INLINE_STYLE)) }
            }
            body {
                div.d-flex style="height: 100vh" {
                    (sidebar::render(router, slots.active))
                    div.flex-grow-1 style="overflow: auto" {
                        (navbar(router))
                        div.container-fluid {
                            main { (content) }
                        }
                        (footer())
                    }
                }
            }
        }
    }
}

fn navbar(router: &Router<View>) -> Markup {
    html! {
        nav.navbar.navbar-light.bg-light {
            div.container-fluid {
                a.navbar-brand href=(router.href("/")) { "Pressroom" }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.footer.text-center {
            small { "Pressroom Admin" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::route_table;

    #[test]
    fn test_layout_wraps_content() {
        let router = route_table("", true).unwrap();
        let content = html! { h1 { "Orders" } };
        let html = layout(&router, content, Slots::new("Orders")).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Orders - Pressroom Admin</title>"));
        assert!(html.contains("<main><h1>Orders</h1></main>"));
        assert!(html.contains("class=\"sidebar\""));
        assert!(html.contains("Pressroom Admin</small>"));
    }

    #[test]
    fn test_brand_links_home_under_base() {
        let router = route_table("/admin", true).unwrap();
        let html = layout(&router, html! {}, Slots::new("Dashboard")).into_string();
        assert!(html.contains(r#"href="/admin">Pressroom</a>"#));
    }
}
