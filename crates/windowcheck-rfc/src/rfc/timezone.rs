//! Timezone resolution and wall-clock localization.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::collections::HashMap;
use std::str::FromStr;

/// Error during timezone conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Non-existent time during DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),
}

/// Resolver for timezone identifiers.
///
/// Maintains a cache of resolved timezones keyed by the identifier as supplied.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Aliases and Windows zone names are canonicalized to IANA names first.
    ///
    /// ## Errors
    ///
    /// Returns `ConversionError::UnknownTimezone` if the identifier cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let tz = Tz::from_str(tzid.trim())
            .or_else(|_e| Tz::from_str(&normalize_tzid(tzid)))
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;

        tracing::trace!(tzid, resolved = %tz.name(), "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

/// Maps non-IANA or aliased identifiers to a canonical IANA name.
fn normalize_tzid(tzid: &str) -> String {
    let trimmed = tzid.trim();
    let stripped = trimmed
        .strip_prefix("/mozilla.org/")
        .or_else(|| trimmed.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(trimmed);

    let iana_parser = IanaParserExtended::new();

    if let Some(zone) = WindowsParser::new().parse(stripped, None) {
        if let Some(entry) = iana_parser.iter().find(|entry| entry.time_zone == zone) {
            return entry.canonical.to_string();
        }
    }

    // Europe/Kiev -> Europe/Kyiv, US/Eastern -> America/New_York
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Attaches a timezone to a wall-clock date-time.
///
/// During a DST fold the earlier of the two instants is used.
///
/// ## Errors
///
/// Returns `ConversionError::NonExistentTime` if the wall time falls in a DST gap.
pub fn localize(local_time: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, ConversionError> {
    match tz.from_local_datetime(&local_time) {
        LocalResult::None => Err(ConversionError::NonExistentTime(format!(
            "{local_time} in timezone {}",
            tz.name()
        ))),
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _latest) => Ok(earliest),
    }
}

/// ## Summary
/// Lenient variant of [`localize`] that shifts wall times inside a DST gap
/// forward by one hour instead of failing.
///
/// ## Errors
///
/// Returns an error only if the shifted time is still non-existent.
pub fn localize_lenient(
    local_time: NaiveDateTime,
    tz: Tz,
) -> Result<DateTime<Tz>, ConversionError> {
    match localize(local_time, tz) {
        Err(ConversionError::NonExistentTime(reason)) => {
            tracing::debug!(%reason, "Shifting wall time out of DST gap");
            localize(local_time + chrono::TimeDelta::hours(1), tz)
        }
        other => other,
    }
}
