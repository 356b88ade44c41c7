//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single outbound HTTP gateway with failure normalization,
//! and `types` defines the wire schema the backend serves.

pub mod api;
pub mod types;
