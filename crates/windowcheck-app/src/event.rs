//! Event-driven entry point shared by the function-as-a-service binary.

use chrono::{DateTime, Utc};
use serde_json::Value;
use windowcheck_core::config::Settings;
use windowcheck_service::params::{EnvironmentSource, ResolutionChain};
use windowcheck_service::window::evaluate;

use crate::error::AppResult;
use crate::output::ScheduleInfo;

/// ## Summary
/// Resolves schedule parameters for `event` (environment first, then event
/// fields, then `params.querystring`) and evaluates the window at `now`.
///
/// ## Errors
/// Returns an error if a required parameter is missing or the schedule is
/// invalid.
#[tracing::instrument(skip_all)]
pub fn handle_event(
    env: &EnvironmentSource,
    event: &Value,
    settings: &Settings,
    now: DateTime<Utc>,
) -> AppResult<ScheduleInfo> {
    let request = ResolutionChain::for_event(env, event)
        .resolve_request(&settings.schedule.default_timezone)?;
    tracing::debug!(request = ?request, "Resolved window request");

    let result = evaluate(&request, now)?;
    Ok(ScheduleInfo::from(&result))
}
