//! RFC 5545 recurrence expansion and timezone resolution for windowcheck.

pub mod error;
pub mod rfc;
