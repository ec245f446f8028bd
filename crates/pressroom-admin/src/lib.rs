//! Pressroom admin dashboard
//!
//! A routed shell around a fixed set of dashboard views. Configuration decides
//! once whether the dashboard is served at all; without a backend location
//! every path answers with a configuration prompt.

pub mod config;
pub mod layout;
pub mod server;
pub mod shell;
pub mod sidebar;
pub mod views;

pub use config::Config;
pub use server::{app, AppState};
pub use shell::{Dashboard, Rendered, Resolution, Shell};
pub use views::{route_table, View};
