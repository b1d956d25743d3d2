//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbars, toasts, guards) and small
//! presentation pieces while reading shared state from Leptos context
//! providers.

pub mod admin_navbar;
pub mod color_swatches;
pub mod dashboard_navbar;
pub mod guards;
pub mod navbar;
pub mod product_card;
pub mod toast_host;
