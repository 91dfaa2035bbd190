//! Middleware module
//!
//! This module contains middleware for HTTP request processing

pub mod logging;

pub use logging::{log_requests, REQUEST_ID_HEADER};
