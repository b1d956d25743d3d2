//! Client-side state provided through Leptos context.

pub mod analysis;
pub mod session;
pub mod toasts;
