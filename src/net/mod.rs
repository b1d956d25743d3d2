//! Backend REST client: the HTTP wrapper, the CSRF bootstrap, wire DTOs
//! and one module per endpoint family.

pub mod analysis;
pub mod auth;
pub mod csrf;
pub mod http;
pub mod products;
pub mod types;
