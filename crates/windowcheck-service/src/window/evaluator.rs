//! Decides whether a recurring start/stop window is active at an instant.

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use windowcheck_core::constants::SEED_OFFSET_DAYS;
use windowcheck_core::error::CoreError;
use windowcheck_core::types::{ScheduleField, TimeOfDay};
use windowcheck_rfc::rfc::{OccurrenceSequence, RecurrencePattern, TimeZoneResolver, localize_lenient};

use crate::error::{ServiceError, ServiceResult};

/// Raw schedule inputs as supplied by an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub start_hour: u32,
    pub start_minute: u32,
    pub start_rule: String,
    pub stop_hour: u32,
    pub stop_minute: u32,
    pub stop_rule: String,
    pub timezone: String,
}

/// Nearest start and stop occurrences on either side of the evaluation instant.
///
/// Both sides are inclusive: an occurrence exactly at "now" is both the last
/// and the next one. A side is `None` when a finite rule has no occurrence there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub last_start: Option<DateTime<Tz>>,
    pub next_start: Option<DateTime<Tz>>,
    pub last_stop: Option<DateTime<Tz>>,
    pub next_stop: Option<DateTime<Tz>>,
}

/// Which branch of the activity policy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Midnight-to-midnight schedule that rolled over today.
    AllDay,
    /// After today's start, before today's stop, no further start today.
    SameDayWindow,
    Inactive,
}

impl Decision {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::AllDay | Self::SameDayWindow)
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub decision: Decision,
    pub start_pattern: RecurrencePattern,
    pub stop_pattern: RecurrencePattern,
    pub start_time: TimeOfDay,
    pub stop_time: TimeOfDay,
    pub boundaries: Boundaries,
    /// Zone identifier as requested.
    pub timezone: String,
    pub now: DateTime<Tz>,
    pub seed_start: DateTime<Tz>,
    pub seed_stop: DateTime<Tz>,
}

impl EvaluationResult {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.decision.is_active()
    }

    #[must_use]
    pub fn seed_date(&self) -> NaiveDate {
        self.seed_start.date_naive()
    }
}

/// ## Summary
/// Evaluates `request` at the current wall-clock instant.
///
/// ## Errors
/// See [`evaluate`].
pub fn evaluate_now(request: &WindowRequest) -> ServiceResult<EvaluationResult> {
    evaluate(request, Utc::now())
}

/// ## Summary
/// Evaluates whether the window described by `request` is active at `now`.
///
/// Both rules are anchored [`SEED_OFFSET_DAYS`] before today (in the
/// requested zone) and expanded independently. The window is active when
/// either:
/// - start and stop are both 00:00 and the last start and last stop both
///   fell on today, or
/// - the next stop is later today and the next start is not today.
///
/// Windows whose stop falls on a later day than their start are not
/// recognized as active before the stop's day.
///
/// ## Errors
/// Returns `ServiceError::InvalidScheduleSpec` naming the offending field if
/// an hour or minute is out of range, the timezone cannot be resolved, or a
/// rule cannot be parsed or anchored.
#[tracing::instrument(skip(request), fields(tz = %request.timezone))]
pub fn evaluate(request: &WindowRequest, now: DateTime<Utc>) -> ServiceResult<EvaluationResult> {
    let start_time = time_of_day(
        request.start_hour,
        request.start_minute,
        ScheduleField::StartHour,
        ScheduleField::StartMinute,
    )?;
    let stop_time = time_of_day(
        request.stop_hour,
        request.stop_minute,
        ScheduleField::StopHour,
        ScheduleField::StopMinute,
    )?;

    let tz = TimeZoneResolver::new()
        .resolve(&request.timezone)
        .map_err(|err| ServiceError::invalid(ScheduleField::Timezone, err))?;

    let start_pattern = RecurrencePattern::parse(&request.start_rule)
        .map_err(|err| ServiceError::invalid(ScheduleField::StartRule, err))?;
    let stop_pattern = RecurrencePattern::parse(&request.stop_rule)
        .map_err(|err| ServiceError::invalid(ScheduleField::StopRule, err))?;

    let now = now.with_timezone(&tz);
    let today = now.date_naive();
    let seed_date = today - Days::new(SEED_OFFSET_DAYS);

    let seed_start = seed_instant(seed_date, start_time, tz, ScheduleField::StartHour)?;
    let seed_stop = seed_instant(seed_date, stop_time, tz, ScheduleField::StopHour)?;

    let start_sequence = anchor(&start_pattern, seed_start, ScheduleField::StartRule)?;
    let stop_sequence = anchor(&stop_pattern, seed_stop, ScheduleField::StopRule)?;

    let boundaries = Boundaries {
        last_start: start_sequence.last_at_or_before(now),
        next_start: start_sequence.first_at_or_after(now),
        last_stop: stop_sequence.last_at_or_before(now),
        next_stop: stop_sequence.first_at_or_after(now),
    };

    let decision = decide(start_time, stop_time, &boundaries, now);

    let result = EvaluationResult {
        decision,
        start_pattern,
        stop_pattern,
        start_time,
        stop_time,
        boundaries,
        timezone: request.timezone.clone(),
        now,
        seed_start,
        seed_stop,
    };

    for field in result.trace() {
        tracing::debug!(field = field.key.as_str(), value = %field.value, "Evaluation trace");
    }
    tracing::info!(
        active = result.is_active(),
        decision = ?decision,
        "Window evaluated"
    );

    Ok(result)
}

fn time_of_day(
    hour: u32,
    minute: u32,
    hour_field: ScheduleField,
    minute_field: ScheduleField,
) -> ServiceResult<TimeOfDay> {
    TimeOfDay::new(hour, minute).map_err(|err| match err {
        CoreError::MinuteOutOfRange(_) => ServiceError::invalid(minute_field, err),
        CoreError::HourOutOfRange(_) | CoreError::InvalidInput(_) => {
            ServiceError::invalid(hour_field, err)
        }
    })
}

fn seed_instant(
    date: NaiveDate,
    time: TimeOfDay,
    tz: Tz,
    field: ScheduleField,
) -> ServiceResult<DateTime<Tz>> {
    localize_lenient(date.and_time(time.to_naive_time()), tz)
        .map_err(|err| ServiceError::invalid(field, err))
}

fn anchor(
    pattern: &RecurrencePattern,
    seed: DateTime<Tz>,
    field: ScheduleField,
) -> ServiceResult<OccurrenceSequence> {
    pattern
        .anchor(seed)
        .map_err(|err| ServiceError::invalid(field, err))
}

/// Calendar-date equality in the zone `today` was taken from.
fn on_today(instant: Option<&DateTime<Tz>>, today: NaiveDate) -> bool {
    instant.is_some_and(|dt| dt.date_naive() == today)
}

fn decide(
    start_time: TimeOfDay,
    stop_time: TimeOfDay,
    boundaries: &Boundaries,
    now: DateTime<Tz>,
) -> Decision {
    let today = now.date_naive();

    if on_today(boundaries.last_start.as_ref(), today)
        && on_today(boundaries.last_stop.as_ref(), today)
        && start_time.is_midnight()
        && stop_time.is_midnight()
    {
        return Decision::AllDay;
    }

    let stops_later_today = on_today(boundaries.next_stop.as_ref(), today)
        && boundaries.next_stop.is_some_and(|stop| now < stop);
    if stops_later_today && !on_today(boundaries.next_start.as_ref(), today) {
        return Decision::SameDayWindow;
    }

    Decision::Inactive
}
