//! Page-level components, one per route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their route's data fetching and submit flows. Anything
//! guarded mounts inside `RequireAuth` or `RequireAdmin` from
//! `components::guards`, so pages themselves can assume the session
//! question is already settled.

pub mod about;
pub mod admin_analyses;
pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_product_form;
pub mod admin_products;
pub mod analysis;
pub mod catalog;
pub mod dashboard;
pub mod history;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod results;
