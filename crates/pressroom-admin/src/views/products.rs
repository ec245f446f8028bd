use maud::{html, Markup};

use super::ViewContext;

/// Product categories, in display order
///
/// None of these paths has a route of its own; they land on the wildcard view.
pub(super) const CATEGORIES: [(&str, &str); 6] = [
    ("All Products", "/products/all"),
    ("Books", "/products/books"),
    ("eBooks", "/products/ebooks"),
    ("Audiobooks", "/products/audiobooks"),
    ("Comic Books", "/products/comic-books"),
    ("T-Shirts", "/products/tshirts"),
];

pub(super) fn listing(ctx: &ViewContext<'_>) -> Markup {
    html! {
        h1 { "Products" }
        ul {
            @for (label, path) in CATEGORIES {
                li {
                    a href=(ctx.href(path)) { (label) }
                }
            }
        }
    }
}
