//! Application pages module
//!
//! - Auth page (home)
//! - Users page (landing after sign-in)
//! - Not found page

mod auth;
mod not_found;
mod users;

pub use auth::AuthPage;
pub use not_found::NotFoundPage;
pub use users::UsersPage;
