//! Result rendering for callers that depend on the published field names.

use serde::Serialize;
use windowcheck_service::window::{EvaluationResult, format_instant};

use crate::error::AppResult;

/// Flat result record. Field order is the output order, and `event_active`
/// is the string `"true"` or `"false"` rather than a JSON boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleInfo {
    pub event_active: String,
    pub start_rule: String,
    pub stop_rule: String,
    pub start_time: String,
    pub stop_time: String,
    pub next_start: Option<String>,
    pub next_stop: Option<String>,
    pub last_start: Option<String>,
    pub last_stop: Option<String>,
    pub timezone: String,
    pub now: String,
}

impl From<&EvaluationResult> for ScheduleInfo {
    fn from(result: &EvaluationResult) -> Self {
        let bounds = &result.boundaries;
        Self {
            event_active: result.is_active().to_string(),
            start_rule: result.start_pattern.to_property(),
            stop_rule: result.stop_pattern.to_property(),
            start_time: result.start_time.to_string(),
            stop_time: result.stop_time.to_string(),
            next_start: bounds.next_start.as_ref().map(format_instant),
            next_stop: bounds.next_stop.as_ref().map(format_instant),
            last_start: bounds.last_start.as_ref().map(format_instant),
            last_stop: bounds.last_stop.as_ref().map(format_instant),
            timezone: result.timezone.clone(),
            now: format_instant(&result.now),
        }
    }
}

impl ScheduleInfo {
    /// ## Summary
    /// Renders the record as a single-line JSON object.
    ///
    /// ## Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders one `key: value` line per field; absent instants print as `none`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "none".to_string());
        let lines = [
            ("event_active", self.event_active.clone()),
            ("start_rule", self.start_rule.clone()),
            ("stop_rule", self.stop_rule.clone()),
            ("start_time", self.start_time.clone()),
            ("stop_time", self.stop_time.clone()),
            ("next_start", optional(&self.next_start)),
            ("next_stop", optional(&self.next_stop)),
            ("last_start", optional(&self.last_start)),
            ("last_stop", optional(&self.last_stop)),
            ("timezone", self.timezone.clone()),
            ("now", self.now.clone()),
        ];

        lines
            .iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use windowcheck_service::window::{WindowRequest, evaluate};

    fn midweek() -> ScheduleInfo {
        let request = WindowRequest {
            start_hour: 9,
            start_minute: 0,
            start_rule: "FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR".to_string(),
            stop_hour: 17,
            stop_minute: 0,
            stop_rule: "RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR".to_string(),
            timezone: "Australia/Sydney".to_string(),
        };
        // Wednesday 2026-10-21 10:00 in Sydney
        let now = Utc.with_ymd_and_hms(2026, 10, 20, 23, 0, 0).unwrap();
        ScheduleInfo::from(&evaluate(&request, now).unwrap())
    }

    #[test]
    fn json_keeps_key_order_and_string_flag() {
        let json = midweek().to_json().unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"event_active":"true","#,
                r#""start_rule":"RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR","#,
                r#""stop_rule":"RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR","#,
                r#""start_time":"09:00:00","stop_time":"17:00:00","#,
                r#""next_start":"2026-10-22T09:00:00+11:00","#,
                r#""next_stop":"2026-10-21T17:00:00+11:00","#,
                r#""last_start":"2026-10-21T09:00:00+11:00","#,
                r#""last_stop":"2026-10-20T17:00:00+11:00","#,
                r#""timezone":"Australia/Sydney","#,
                r#""now":"2026-10-21T10:00:00+11:00"}"#,
            )
        );
    }

    #[test]
    fn text_lists_fields_line_by_line() {
        let mut info = midweek();
        info.next_start = None;
        let text = info.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "event_active: true");
        assert_eq!(lines[5], "next_start: none");
        assert_eq!(lines[10], "now: 2026-10-21T10:00:00+11:00");
    }
}
