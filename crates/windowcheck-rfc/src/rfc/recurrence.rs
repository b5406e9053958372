//! Recurrence patterns and the occurrence sequences they generate.

use chrono::DateTime;
use chrono_tz::Tz;
use rrule::{RRule, RRuleSet, Unvalidated};
use windowcheck_core::constants::RRULE_PREFIX;

use crate::error::{RfcError, RfcResult};

/// A parsed `RRULE` that has not yet been anchored to a start instant.
#[derive(Debug, Clone)]
pub struct RecurrencePattern {
    body: String,
    rule: RRule<Unvalidated>,
}

impl RecurrencePattern {
    /// ## Summary
    /// Parses a recurrence rule such as `FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR`.
    ///
    /// A leading `RRULE:` is accepted and ignored.
    ///
    /// ## Errors
    /// Returns an error if the rule is empty or rejected by the `rrule` parser.
    pub fn parse(text: &str) -> RfcResult<Self> {
        let trimmed = text.trim();
        let body = match trimmed.get(..RRULE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(RRULE_PREFIX) => {
                trimmed[RRULE_PREFIX.len()..].trim()
            }
            _ => trimmed,
        };

        if body.is_empty() {
            return Err(RfcError::ParseError("empty recurrence rule".to_string()));
        }

        let rule = body
            .parse::<RRule<Unvalidated>>()
            .map_err(|err| RfcError::ParseError(format!("`{body}`: {err}")))?;
        tracing::trace!(rrule = %body, "Parsed RRULE");

        Ok(Self {
            body: body.to_string(),
            rule,
        })
    }

    /// Rule text without the property name.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Rule rendered as an iCalendar property, e.g. `RRULE:FREQ=DAILY`.
    #[must_use]
    pub fn to_property(&self) -> String {
        format!("{RRULE_PREFIX}{}", self.body)
    }

    /// ## Summary
    /// Anchors the rule at `seed`, producing the occurrence sequence.
    ///
    /// The `rrule` crate infers BYHOUR/BYMINUTE/BYSECOND from the seed, so
    /// every occurrence lands on the seed's wall-clock time in the seed's zone.
    ///
    /// ## Errors
    /// Returns an error if the rule fails validation against the seed.
    pub fn anchor(&self, seed: DateTime<Tz>) -> RfcResult<OccurrenceSequence> {
        let zone = seed.timezone();
        let dt_start = seed.with_timezone(&rrule::Tz::Tz(zone));
        let set = self.rule.clone().build(dt_start)?;

        tracing::trace!(rrule = %self.body, seed = %seed, "Anchored recurrence");
        Ok(OccurrenceSequence { set, zone })
    }
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_property())
    }
}

/// Strictly increasing instants produced by an anchored pattern.
#[derive(Debug, Clone)]
pub struct OccurrenceSequence {
    set: RRuleSet,
    zone: Tz,
}

impl OccurrenceSequence {
    /// Latest occurrence at or before `instant`.
    #[must_use]
    pub fn last_at_or_before(&self, instant: DateTime<Tz>) -> Option<DateTime<Tz>> {
        let bound = instant.with_timezone(&rrule::Tz::Tz(self.zone));
        let mut last = None;
        for occurrence in &self.set {
            if occurrence > bound {
                break;
            }
            last = Some(occurrence);
        }
        last.map(|dt| dt.with_timezone(&self.zone))
    }

    /// Earliest occurrence at or after `instant`.
    #[must_use]
    pub fn first_at_or_after(&self, instant: DateTime<Tz>) -> Option<DateTime<Tz>> {
        let bound = instant.with_timezone(&rrule::Tz::Tz(self.zone));
        for occurrence in &self.set {
            if occurrence >= bound {
                return Some(occurrence.with_timezone(&self.zone));
            }
        }
        None
    }
}
