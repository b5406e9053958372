//! Recurring window evaluation.

pub mod evaluator;
pub mod trace;

pub use evaluator::{Boundaries, Decision, EvaluationResult, WindowRequest, evaluate, evaluate_now};
pub use trace::{TraceField, TraceKey, format_instant};
