//! Reusable UI components

pub mod footer;
pub mod navbar;
pub mod theme_toggle;

pub use footer::Footer;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
