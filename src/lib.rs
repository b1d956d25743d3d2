//! # chromalens
//!
//! Leptos + WASM frontend for the ChromaLens personal colour analysis and
//! product catalog service. All business logic lives in an external REST
//! backend; this crate renders state and issues requests.
//!
//! Sessions are cookie-based in the Laravel Sanctum style: the client
//! bootstraps an anti-forgery cookie before every mutating request and
//! probes `/api/me` on startup to restore an existing session. The session
//! store and the route guards built on it are the load-bearing parts of
//! this crate; everything else is pages and plumbing.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
