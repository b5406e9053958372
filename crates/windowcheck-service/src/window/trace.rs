//! Named table of the values an evaluation worked with, for debug output.

use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;

use super::evaluator::EvaluationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceKey {
    SeedDate,
    SeedStart,
    SeedStop,
    StartTime,
    StopTime,
    StartRule,
    StopRule,
    Timezone,
    Now,
    LastStart,
    NextStart,
    LastStop,
    NextStop,
    EventActive,
}

impl TraceKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeedDate => "seed_date",
            Self::SeedStart => "seed_start",
            Self::SeedStop => "seed_stop",
            Self::StartTime => "start_time",
            Self::StopTime => "stop_time",
            Self::StartRule => "start_rule",
            Self::StopRule => "stop_rule",
            Self::Timezone => "timezone",
            Self::Now => "now",
            Self::LastStart => "last_start",
            Self::NextStart => "next_start",
            Self::LastStop => "last_stop",
            Self::NextStop => "next_stop",
            Self::EventActive => "event_active",
        }
    }
}

impl std::fmt::Display for TraceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceField {
    pub key: TraceKey,
    pub value: String,
}

impl TraceField {
    fn new(key: TraceKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    fn instant(key: TraceKey, instant: Option<&DateTime<Tz>>) -> Self {
        Self::new(key, instant.map_or_else(|| "none".to_string(), format_instant))
    }
}

impl std::fmt::Display for TraceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// ISO 8601 with the zone's UTC offset, e.g. `2026-10-21T17:00:00+11:00`.
#[must_use]
pub fn format_instant(instant: &DateTime<Tz>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

impl EvaluationResult {
    /// ## Summary
    /// Lists the values this evaluation was computed from, in a fixed order.
    #[must_use]
    pub fn trace(&self) -> Vec<TraceField> {
        let bounds = &self.boundaries;
        vec![
            TraceField::new(TraceKey::SeedDate, self.seed_date().to_string()),
            TraceField::instant(TraceKey::SeedStart, Some(&self.seed_start)),
            TraceField::instant(TraceKey::SeedStop, Some(&self.seed_stop)),
            TraceField::new(TraceKey::StartTime, self.start_time.to_string()),
            TraceField::new(TraceKey::StopTime, self.stop_time.to_string()),
            TraceField::new(TraceKey::StartRule, self.start_pattern.to_property()),
            TraceField::new(TraceKey::StopRule, self.stop_pattern.to_property()),
            TraceField::new(TraceKey::Timezone, self.timezone.as_str()),
            TraceField::instant(TraceKey::Now, Some(&self.now)),
            TraceField::instant(TraceKey::LastStart, bounds.last_start.as_ref()),
            TraceField::instant(TraceKey::NextStart, bounds.next_start.as_ref()),
            TraceField::instant(TraceKey::LastStop, bounds.last_stop.as_ref()),
            TraceField::instant(TraceKey::NextStop, bounds.next_stop.as_ref()),
            TraceField::new(TraceKey::EventActive, self.is_active().to_string()),
        ]
    }
}
