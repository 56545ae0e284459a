//! Networking modules for the account service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` wraps authenticated JSON requests, `api` exposes the service calls,
//! `types` defines the wire schema, and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
