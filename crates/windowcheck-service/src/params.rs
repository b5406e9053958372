//! Schedule parameter resolution for event-driven callers.
//!
//! Each field is looked up in an ordered chain of sources; the first source
//! that has the field wins. The standard chain is process environment, then
//! the event's top-level fields, then the event's `params.querystring` map.

use std::collections::HashMap;

use serde_json::Value;
use windowcheck_core::types::{ScheduleField, parse_clock_component};

use crate::error::{ServiceError, ServiceResult};
use crate::window::WindowRequest;

/// A place schedule parameters can be read from.
pub trait ParamSource {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Returns the raw text for `field`, or `None` if this source lacks it.
    fn lookup(&self, field: ScheduleField) -> Option<String>;
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn lookup(&self, field: ScheduleField) -> Option<String> {
        (**self).lookup(field)
    }
}

/// Variables named exactly after the field keys (`start_hour`, `tz`, ...).
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSource {
    vars: HashMap<String, String>,
}

impl EnvironmentSource {
    /// Snapshot of the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ParamSource for EnvironmentSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn lookup(&self, field: ScheduleField) -> Option<String> {
        self.vars.get(field.as_str()).cloned()
    }
}

/// Top-level fields of an inbound event.
#[derive(Debug, Clone, Copy)]
pub struct EventSource<'a> {
    event: &'a Value,
}

impl<'a> EventSource<'a> {
    #[must_use]
    pub const fn new(event: &'a Value) -> Self {
        Self { event }
    }
}

impl ParamSource for EventSource<'_> {
    fn name(&self) -> &'static str {
        "event"
    }

    fn lookup(&self, field: ScheduleField) -> Option<String> {
        self.event.get(field.as_str()).and_then(json_text)
    }
}

/// The `params.querystring` map nested inside an inbound event.
#[derive(Debug, Clone, Copy)]
pub struct QuerystringSource<'a> {
    event: &'a Value,
}

impl<'a> QuerystringSource<'a> {
    #[must_use]
    pub const fn new(event: &'a Value) -> Self {
        Self { event }
    }
}

impl ParamSource for QuerystringSource<'_> {
    fn name(&self) -> &'static str {
        "querystring"
    }

    fn lookup(&self, field: ScheduleField) -> Option<String> {
        self.event
            .get("params")
            .and_then(|params| params.get("querystring"))
            .and_then(|query| query.get(field.as_str()))
            .and_then(json_text)
    }
}

/// Scalars only; `null`, arrays and objects count as absent.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Ordered list of sources consulted until one has the requested field.
#[derive(Default)]
pub struct ResolutionChain<'a> {
    sources: Vec<Box<dyn ParamSource + 'a>>,
}

impl<'a> ResolutionChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source with lower priority than those already present.
    #[must_use]
    pub fn with_source(mut self, source: impl ParamSource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Environment, then event fields, then the event's querystring.
    #[must_use]
    pub fn for_event(env: &'a EnvironmentSource, event: &'a Value) -> Self {
        Self::new()
            .with_source(env)
            .with_source(EventSource::new(event))
            .with_source(QuerystringSource::new(event))
    }

    #[must_use]
    pub fn lookup(&self, field: ScheduleField) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let found = source.lookup(field);
            if found.is_some() {
                tracing::trace!(%field, source = source.name(), "Resolved parameter");
            }
            found
        })
    }

    /// ## Summary
    /// Resolves a required field.
    ///
    /// ## Errors
    /// Returns `ServiceError::MissingParameter` if no source has the field.
    pub fn resolve(&self, field: ScheduleField) -> ServiceResult<String> {
        self.lookup(field).ok_or_else(|| {
            tracing::debug!(%field, "Parameter missing from every source");
            ServiceError::MissingParameter(field)
        })
    }

    /// ## Summary
    /// Resolves all seven schedule fields into a request. The timezone falls
    /// back to `default_timezone`; every other field is required.
    ///
    /// ## Errors
    /// Returns `ServiceError::MissingParameter` for an absent required field
    /// and `ServiceError::InvalidScheduleSpec` for a non-numeric hour or minute.
    pub fn resolve_request(&self, default_timezone: &str) -> ServiceResult<WindowRequest> {
        let clock = |field: ScheduleField| -> ServiceResult<u32> {
            let text = self.resolve(field)?;
            parse_clock_component(&text).map_err(|err| ServiceError::invalid(field, err))
        };

        Ok(WindowRequest {
            start_hour: clock(ScheduleField::StartHour)?,
            start_minute: clock(ScheduleField::StartMinute)?,
            start_rule: self.resolve(ScheduleField::StartRule)?,
            stop_hour: clock(ScheduleField::StopHour)?,
            stop_minute: clock(ScheduleField::StopMinute)?,
            stop_rule: self.resolve(ScheduleField::StopRule)?,
            timezone: self
                .lookup(ScheduleField::Timezone)
                .unwrap_or_else(|| default_timezone.to_string()),
        })
    }
}
