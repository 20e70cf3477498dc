//! Portal single-page application
//!
//! Public pages, a signed-in portal and an admin view, with every route
//! passing through the navigation guard from `portal-core`.

pub mod app;
pub mod auth;
pub mod auth_guard;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod services;
pub mod storage;
pub mod theme;
pub mod toast;

pub use app::App;
pub use error::{AppError, AppResult};
