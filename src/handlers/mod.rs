//! HTTP handlers module
//!
//! The proxy routes the browser client talks to:
//! - Translation and status
//! - OCR translate and OCR text processing
//! - Free-form generation

pub mod error;
pub mod generate;
pub mod ocr;
pub mod routes;
pub mod translate;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
