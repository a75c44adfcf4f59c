//! REST API endpoint implementations.
//!
//! Free functions taking the HTTP client, a service base URL and the auth
//! token. The [`crate::client`] service types wrap them with session state.

mod auth;
mod load_balancers;
pub mod pagination;
mod request;
mod routers;
mod servers;
mod volumes;

pub use auth::{IssuedToken, issue_token};
pub use load_balancers::list_load_balancers;
pub use pagination::{list_all, pages};
pub use request::{REQUEST_ID_HEADER, send_request};
pub use routers::list_routers;
pub use servers::list_servers;
pub use volumes::list_volumes;
