//! Authentication module

pub mod context;
pub mod redirect;

pub use context::{SessionAction, SessionContext, SessionProvider, SessionState, use_session};
pub use redirect::{LoginQuery, post_login_target};
