use maud::{html, Markup};

use super::ViewContext;

pub(super) fn home(ctx: &ViewContext<'_>) -> Markup {
    html! {
        h1 { "Dashboard" }
        p.lead { "Print shop administration: products, orders and design work." }
        div.row {
            @for (label, path) in [("Products", "/products"), ("Orders", "/orders"), ("Analytics", "/analytics")] {
                div.col {
                    a.card href=(ctx.href(path)) { (label) }
                }
            }
        }
    }
}

pub(super) fn demo(ctx: &ViewContext<'_>) -> Markup {
    html! {
        h1 { "Demo" }
        ul.list-group {
            @for id in 1..=3 {
                li.list-group-item {
                    a href=(ctx.href(&format!("/single/{}", id))) { "Item " (id) }
                }
            }
        }
        a href=(ctx.href("/")) { "Back home" }
    }
}

pub(super) fn single(ctx: &ViewContext<'_>) -> Markup {
    let id = ctx.params.get("id").unwrap_or_default();

    html! {
        h1 { "Item " (id) }
        p { "Showing element " code { (id) } "." }
        a href=(ctx.href("/demo")) { "Back to demo" }
    }
}

pub(super) fn stub(heading: &str, lead: &str) -> Markup {
    html! {
        h1 { (heading) }
        p.lead { (lead) }
    }
}

pub(super) fn not_found() -> Markup {
    html! {
        h1 { "Not found!" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::route_table;
    use pressroom_router::Params;

    #[test]
    fn test_single_escapes_param() {
        let router = route_table("", true).unwrap();
        let params: Params = [("id", "<b>42</b>")].into_iter().collect();
        let ctx = ViewContext { params: &params, router: &router };

        let html = single(&ctx).into_string();
        assert!(html.contains("&lt;b&gt;42&lt;/b&gt;"));
        assert!(!html.contains("<b>42</b>"));
    }

    #[test]
    fn test_demo_links_carry_base_path() {
        let router = route_table("/admin", true).unwrap();
        let params = Params::new();
        let ctx = ViewContext { params: &params, router: &router };

        let html = demo(&ctx).into_string();
        assert!(html.contains(r#"href="/admin/single/1""#));
        assert!(html.contains(r#"href="/admin""#));
    }
}
