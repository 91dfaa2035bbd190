//! Test helpers module
//!
//! This module provides utilities and helpers for testing Voxify.
//! It includes mock LLM and proxy servers and a test context setup.

#![allow(dead_code)]

pub mod groq_mock;
pub mod simple_test;
pub mod test_context;

pub use groq_mock::*;
pub use simple_test::*;
pub use test_context::*;
