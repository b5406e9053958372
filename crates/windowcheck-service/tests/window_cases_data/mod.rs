// Expects `evaluate` and `WindowRequest` to be in scope at the include site.

use chrono::{DateTime, FixedOffset, Utc};

pub struct WindowCase {
    pub name: &'static str,
    pub start: (u32, u32),
    pub start_rule: &'static str,
    pub stop: (u32, u32),
    pub stop_rule: &'static str,
    pub tz: &'static str,
    pub now: &'static str,
    pub active: bool,
    pub next_start: Option<&'static str>,
    pub next_stop: Option<&'static str>,
}

const WEEKDAYS: &str = "FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR";

#[expect(clippy::too_many_lines)]
pub fn window_cases() -> Vec<WindowCase> {
    vec![
        WindowCase {
            name: "business_hours_midweek",
            start: (9, 0),
            start_rule: WEEKDAYS,
            stop: (17, 0),
            stop_rule: WEEKDAYS,
            tz: "Australia/Sydney",
            now: "2026-10-21T10:00:00+11:00",
            active: true,
            next_start: Some("2026-10-22T09:00:00+11:00"),
            next_stop: Some("2026-10-21T17:00:00+11:00"),
        },
        WindowCase {
            name: "business_hours_after_close",
            start: (9, 0),
            start_rule: WEEKDAYS,
            stop: (17, 0),
            stop_rule: WEEKDAYS,
            tz: "Australia/Sydney",
            now: "2026-10-21T18:00:00+11:00",
            active: false,
            next_start: Some("2026-10-22T09:00:00+11:00"),
            next_stop: Some("2026-10-22T17:00:00+11:00"),
        },
        WindowCase {
            name: "business_hours_weekend",
            start: (9, 0),
            start_rule: WEEKDAYS,
            stop: (17, 0),
            stop_rule: WEEKDAYS,
            tz: "Australia/Sydney",
            now: "2026-10-24T10:00:00+11:00",
            active: false,
            next_start: Some("2026-10-26T09:00:00+11:00"),
            next_stop: Some("2026-10-26T17:00:00+11:00"),
        },
        WindowCase {
            name: "all_day",
            start: (0, 0),
            start_rule: "FREQ=DAILY",
            stop: (0, 0),
            stop_rule: "FREQ=DAILY",
            tz: "Australia/Sydney",
            now: "2026-10-21T15:00:00+11:00",
            active: true,
            next_start: Some("2026-10-22T00:00:00+11:00"),
            next_stop: Some("2026-10-22T00:00:00+11:00"),
        },
        WindowCase {
            name: "overnight_late_evening",
            start: (22, 0),
            start_rule: "FREQ=DAILY",
            stop: (6, 0),
            stop_rule: "FREQ=DAILY",
            tz: "Australia/Sydney",
            now: "2026-10-21T23:00:00+11:00",
            active: false,
            next_start: Some("2026-10-22T22:00:00+11:00"),
            next_stop: Some("2026-10-22T06:00:00+11:00"),
        },
        WindowCase {
            name: "overnight_early_morning",
            start: (22, 0),
            start_rule: "FREQ=DAILY",
            stop: (6, 0),
            stop_rule: "FREQ=DAILY",
            tz: "Australia/Sydney",
            now: "2026-10-22T05:00:00+11:00",
            active: false,
            next_start: Some("2026-10-22T22:00:00+11:00"),
            next_stop: Some("2026-10-22T06:00:00+11:00"),
        },
        WindowCase {
            name: "utc_just_before_stop",
            start: (8, 30),
            start_rule: "FREQ=DAILY",
            stop: (12, 15),
            stop_rule: "FREQ=DAILY",
            tz: "UTC",
            now: "2026-10-21T12:14:59+00:00",
            active: true,
            next_start: Some("2026-10-22T08:30:00+00:00"),
            next_stop: Some("2026-10-21T12:15:00+00:00"),
        },
        WindowCase {
            name: "utc_at_stop",
            start: (8, 30),
            start_rule: "FREQ=DAILY",
            stop: (12, 15),
            stop_rule: "FREQ=DAILY",
            tz: "UTC",
            now: "2026-10-21T12:15:00+00:00",
            active: false,
            next_start: Some("2026-10-22T08:30:00+00:00"),
            next_stop: Some("2026-10-21T12:15:00+00:00"),
        },
        WindowCase {
            name: "monthly_on_the_21st",
            start: (9, 0),
            start_rule: "FREQ=MONTHLY;BYMONTHDAY=21",
            stop: (17, 0),
            stop_rule: "FREQ=MONTHLY;BYMONTHDAY=21",
            tz: "Australia/Brisbane",
            now: "2026-10-21T12:00:00+10:00",
            active: true,
            next_start: Some("2026-11-21T09:00:00+10:00"),
            next_stop: Some("2026-10-21T17:00:00+10:00"),
        },
    ]
}

pub fn assert_case(case: &WindowCase) {
    let request = WindowRequest {
        start_hour: case.start.0,
        start_minute: case.start.1,
        start_rule: case.start_rule.to_string(),
        stop_hour: case.stop.0,
        stop_minute: case.stop.1,
        stop_rule: case.stop_rule.to_string(),
        timezone: case.tz.to_string(),
    };
    let now = parse_rfc3339(case.now).with_timezone(&Utc);

    let result = evaluate(&request, now)
        .unwrap_or_else(|err| panic!("Case {} failed to evaluate: {err}", case.name));

    assert_eq!(
        result.is_active(),
        case.active,
        "Case {} activity did not match",
        case.name
    );
    assert_eq!(
        result.boundaries.next_start.map(|dt| dt.timestamp()),
        case.next_start.map(|value| parse_rfc3339(value).timestamp()),
        "Case {} next start did not match",
        case.name
    );
    assert_eq!(
        result.boundaries.next_stop.map(|dt| dt.timestamp()),
        case.next_stop.map(|value| parse_rfc3339(value).timestamp()),
        "Case {} next stop did not match",
        case.name
    );
}

fn parse_rfc3339(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap_or_else(|err| {
        panic!("Failed to parse rfc3339 value {value}: {err}")
    })
}
