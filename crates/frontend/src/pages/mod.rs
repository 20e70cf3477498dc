//! Routed pages

mod about;
mod admin;
mod contacts;
mod downloads;
mod landing;
mod login;
mod not_found;
mod portal;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use contacts::ContactsPage;
pub use downloads::DownloadsPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use portal::PortalPage;
