// Authentication: session cookies, extractors and the signup/login pages

pub mod config;
pub mod middleware;
pub mod routes;
pub mod session;

pub use config::SessionConfig;
pub use middleware::{CurrentUser, MaybeUser, LOGIN_PATH};
pub use routes::routes;
pub use session::{SessionService, SESSION_COOKIE};
