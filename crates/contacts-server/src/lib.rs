//! Contacts HTTP API: routes, shared state, and payload validation.

pub mod http;
pub mod service;
