//! Adapters around the window evaluator: command line, event handler,
//! output rendering and logging setup.

pub mod cli;
pub mod error;
pub mod event;
pub mod logging;
pub mod output;
