// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP boundary of the bot:
//! - Routing
//! - Request handlers (liveness probe, move request)
//! - Error responses
pub mod router;
pub mod handlers;
pub mod http_error;
