//! Dashboard views and the route table that selects them.
//!
//! Every view is static markup; only `Single` reads a bound parameter.

mod pages;
mod products;
pub mod prompt;

use axum::http::StatusCode;
use maud::Markup;
use pressroom_router::{Params, RouteError, Router};
use serde::Serialize;

/// Views selectable by the dashboard router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    Demo,
    Single,
    Products,
    Orders,
    #[serde(rename = "tshirt-design")]
    TShirtDesign,
    BookDesign,
    Pricing,
    Customers,
    Analytics,
    Settings,
    NotFound,
}

/// Declared route table, in declaration order
pub const ROUTES: [(&str, View); 12] = [
    ("/", View::Home),
    ("/demo", View::Demo),
    ("/single/:id", View::Single),
    ("/products", View::Products),
    ("/orders", View::Orders),
    ("/tshirt-design", View::TShirtDesign),
    ("/book-design", View::BookDesign),
    ("/pricing", View::Pricing),
    ("/customers", View::Customers),
    ("/analytics", View::Analytics),
    ("/settings", View::Settings),
    ("*", View::NotFound),
];

/// Builds the dashboard router; each route is named after its view
pub fn route_table(base_path: &str, case_insensitive: bool) -> Result<Router<View>, RouteError> {
    let router = Router::new()
        .with_case_sensitivity(case_insensitive)
        .with_base_path(base_path);

    ROUTES
        .iter()
        .try_fold(router, |router, (pattern, view)| {
            router.with_named_route(view.name(), pattern, *view)
        })
}

/// What a view gets to render with
pub struct ViewContext<'a> {
    pub params: &'a Params,
    pub router: &'a Router<View>,
}

impl ViewContext<'_> {
    /// Base-prefixed link to an application path
    pub fn href(&self, app_path: &str) -> String {
        self.router.href(app_path)
    }
}

impl View {
    /// Stable identifier, also the route name and the JSON form
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Demo => "demo",
            View::Single => "single",
            View::Products => "products",
            View::Orders => "orders",
            View::TShirtDesign => "tshirt-design",
            View::BookDesign => "book-design",
            View::Pricing => "pricing",
            View::Customers => "customers",
            View::Analytics => "analytics",
            View::Settings => "settings",
            View::NotFound => "not-found",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Dashboard",
            View::Demo => "Demo",
            View::Single => "Item",
            View::Products => "Products",
            View::Orders => "Orders",
            View::TShirtDesign => "T-Shirt Design",
            View::BookDesign => "Book Design",
            View::Pricing => "Pricing",
            View::Customers => "Customers",
            View::Analytics => "Analytics",
            View::Settings => "Settings",
            View::NotFound => "Not found",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            View::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }

    pub fn render(self, ctx: &ViewContext<'_>) -> Markup {
        match self {
            View::Home => pages::home(ctx),
            View::Demo => pages::demo(ctx),
            View::Single => pages::single(ctx),
            View::Products => products::listing(ctx),
            View::Orders => pages::stub("Orders", "Incoming and fulfilled print orders."),
            View::TShirtDesign => {
                pages::stub("T-Shirt Design", "Artwork and placement for t-shirt runs.")
            }
            View::BookDesign => {
                pages::stub("Book Design", "Covers, trim sizes and paper stock for book runs.")
            }
            View::Pricing => pages::stub("Pricing", "Base prices, discounts and tax rates."),
            View::Customers => pages::stub("Customers", "Accounts that have placed orders."),
            View::Analytics => pages::stub("Analytics", "Sales and production figures."),
            View::Settings => pages::stub("Settings", "Dashboard preferences."),
            View::NotFound => pages::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_declares_every_view_once() {
        let router = route_table("", false).unwrap();
        assert_eq!(router.routes().len(), ROUTES.len());
        assert!(router.has_fallback());
    }

    #[test]
    fn test_json_name_matches_route_name() {
        for (_, view) in ROUTES {
            let json = serde_json::to_value(view).unwrap();
            assert_eq!(json, serde_json::Value::String(view.name().to_string()));
        }
    }

    #[test]
    fn test_only_not_found_is_404() {
        for (_, view) in ROUTES {
            let expected = if view == View::NotFound {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            assert_eq!(view.status(), expected);
        }
    }
}
