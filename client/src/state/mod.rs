//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so components can depend on
//! small focused models. Both are created once by `App` and shared through
//! Leptos context.

pub mod auth;
pub mod toast;
