//! Error handling for the Taskforge backend.

pub mod error_code;

pub use error_code::ErrorCode;
