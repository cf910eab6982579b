//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navigation, toasts) and the cross-cutting
//! wrappers (route guard, fault barrier) while reading/writing shared state
//! from Leptos context providers.

pub mod fault_barrier;
pub mod nav_bar;
pub mod pager;
pub mod protected_route;
pub mod toast_host;
