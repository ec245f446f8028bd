//! Top-level selector between the routed dashboard and the configuration prompt.
//!
//! Decided once at startup from [`Config`]; requests never re-check configuration.

use axum::http::StatusCode;
use maud::{html, Markup};
use pressroom_router::{Params, RouteError, Router};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::layout::{layout, Slots};
use crate::views::{self, prompt, View, ViewContext};

/// The routed dashboard
#[derive(Debug)]
pub struct Dashboard {
    router: Router<View>,
    backend_url: String,
}

/// Either the dashboard or, without a backend location, the prompt
#[derive(Debug)]
pub enum Shell {
    Configured(Dashboard),
    Unconfigured,
}

/// Outcome of resolving a path, without markup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub configured: bool,
    pub view: Option<View>,
    pub params: Params,
    #[serde(skip)]
    pub status: StatusCode,
}

/// A rendered page
pub struct Rendered {
    pub status: StatusCode,
    pub markup: Markup,
}

impl Dashboard {
    pub fn new(config: &Config, backend_url: impl Into<String>) -> Result<Self, RouteError> {
        let router = views::route_table(
            &config.routing.base_path,
            config.routing.case_insensitive,
        )?;

        Ok(Self {
            router,
            backend_url: backend_url.into(),
        })
    }

    pub fn router(&self) -> &Router<View> {
        &self.router
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl Shell {
    /// Chooses the shell from configuration
    pub fn from_config(config: &Config) -> Result<Self, RouteError> {
        match config.backend_url() {
            Some(url) => {
                let dashboard = Dashboard::new(config, url)?;
                info!(
                    backend = url,
                    base = dashboard.router.base_path(),
                    case_insensitive = dashboard.router.is_case_insensitive(),
                    routes = dashboard.router.routes().len(),
                    "dashboard configured"
                );
                Ok(Shell::Configured(dashboard))
            }
            None => {
                warn!("BACKEND_URL is not set; serving the configuration prompt for every path");
                Ok(Shell::Unconfigured)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Shell::Configured(_))
    }

    /// Resolves a path to a view without rendering it
    pub fn resolve(&self, path: &str) -> Resolution {
        match self {
            Shell::Unconfigured => Resolution {
                configured: false,
                view: None,
                params: Params::new(),
                status: StatusCode::OK,
            },
            Shell::Configured(dashboard) => match dashboard.router.resolve(path) {
                Some(m) => Resolution {
                    configured: true,
                    view: Some(*m.view()),
                    status: m.view().status(),
                    params: m.params,
                },
                None => Resolution {
                    configured: true,
                    view: None,
                    params: Params::new(),
                    status: StatusCode::NOT_FOUND,
                },
            },
        }
    }

    /// Renders the page for a path
    ///
    /// A path the router cannot place (outside the base prefix) renders the
    /// layout with no content.
    pub fn render(&self, path: &str) -> Rendered {
        let dashboard = match self {
            Shell::Unconfigured => {
                return Rendered {
                    status: StatusCode::OK,
                    markup: prompt::page(),
                };
            }
            Shell::Configured(dashboard) => dashboard,
        };

        let router = &dashboard.router;
        match router.resolve(path) {
            Some(m) => {
                let view = *m.view();
                let ctx = ViewContext {
                    params: &m.params,
                    router,
                };
                let content = view.render(&ctx);
                Rendered {
                    status: view.status(),
                    markup: layout(router, content, Slots::new(view.title()).active(Some(&m))),
                }
            }
            None => Rendered {
                status: StatusCode::NOT_FOUND,
                markup: layout(router, html! {}, Slots::new(View::NotFound.title())),
            },
        }
    }
}
