//! Window evaluation: decides whether a recurring start/stop schedule is
//! active at an instant, and resolves schedule parameters for adapters.

pub mod error;
pub mod params;
pub mod window;
