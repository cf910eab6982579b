//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the transport (base URL, credentials, error mapping), `query`
//! builds encoded query strings, `api` maps typed requests onto endpoints, and
//! `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod query;
pub mod types;
