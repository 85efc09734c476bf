//! HTTP transport layer
//!
//! Route handlers for the welcome, greeting and health endpoints, plus the not-found fallback.

pub mod handlers;
