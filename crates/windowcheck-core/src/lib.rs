//! Shared building blocks for the windowcheck workspace: configuration,
//! constants, error types and the small value types every layer passes around.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
