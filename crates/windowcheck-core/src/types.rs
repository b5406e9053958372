use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::{CoreError, CoreResult};

/// One of the seven inputs that describe a recurring window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleField {
    StartHour,
    StartMinute,
    StartRule,
    StopHour,
    StopMinute,
    StopRule,
    Timezone,
}

impl ScheduleField {
    /// Every field, in the order adapters resolve them.
    pub const ALL: [Self; 7] = [
        Self::StartHour,
        Self::StartMinute,
        Self::StartRule,
        Self::StopHour,
        Self::StopMinute,
        Self::StopRule,
        Self::Timezone,
    ];

    /// Parameter key used by environment variables and inbound events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartHour => "start_hour",
            Self::StartMinute => "start_minute",
            Self::StartRule => "start_rule",
            Self::StopHour => "stop_hour",
            Self::StopMinute => "stop_minute",
            Self::StopRule => "stop_rule",
            Self::Timezone => "tz",
        }
    }
}

impl std::fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleField {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown schedule field `{s}`")))
    }
}

/// Wall-clock offset within a day at which a start or stop event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// ## Summary
    /// Builds a time of day from an hour (`0..=23`) and a minute (`0..=59`).
    ///
    /// ## Errors
    /// Returns `CoreError::HourOutOfRange` or `CoreError::MinuteOutOfRange`
    /// if a component is out of range.
    pub fn new(hour: u32, minute: u32) -> CoreResult<Self> {
        if hour > 23 {
            return Err(CoreError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(CoreError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    #[must_use]
    pub const fn is_midnight(self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        // Range is checked on construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:00", self.hour, self.minute)
    }
}

/// ## Summary
/// Parses a textual hour or minute component, as supplied by environment
/// variables or event payloads.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` if the text is not a non-negative integer.
pub fn parse_clock_component(text: &str) -> CoreResult<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|err| CoreError::InvalidInput(format!("`{trimmed}` is not a clock value: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_accepts_bounds() {
        let latest = TimeOfDay::new(23, 59).expect("valid time");
        assert_eq!(latest.to_string(), "23:59:00");
        assert_eq!(latest.to_naive_time(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert!(TimeOfDay::new(0, 0).expect("valid time").is_midnight());
    }

    #[test]
    fn time_of_day_rejects_out_of_range() {
        assert!(matches!(
            TimeOfDay::new(24, 0),
            Err(CoreError::HourOutOfRange(24))
        ));
        assert!(matches!(
            TimeOfDay::new(9, 60),
            Err(CoreError::MinuteOutOfRange(60))
        ));
    }

    #[test]
    fn schedule_field_keys_round_trip() {
        for field in ScheduleField::ALL {
            assert_eq!(field.as_str().parse::<ScheduleField>().unwrap(), field);
        }
        assert_eq!(ScheduleField::Timezone.as_str(), "tz");
        assert!("timezone".parse::<ScheduleField>().is_err());
    }

    #[test]
    fn clock_component_parsing() {
        assert_eq!(parse_clock_component(" 9 ").unwrap(), 9);
        assert!(matches!(
            parse_clock_component("nine"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(parse_clock_component("-1").is_err());
    }
}
