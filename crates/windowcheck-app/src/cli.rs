use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use windowcheck_service::window::WindowRequest;

/// Checks if an iCal event (RRULE) is currently active based on a start and
/// stop time within a day period.
///
/// Example, weekdays 9am to 5pm in Sydney:
/// windowcheck --start-hour 9 --start-minute 0 --stop-hour 17 --stop-minute 0
///   --tz Australia/Sydney 'FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR'
#[derive(Parser, Debug)]
#[command(name = "windowcheck", version)]
pub struct CliArgs {
    /// Start hour of the event (0-23)
    #[arg(long)]
    pub start_hour: u32,

    /// Start minute of the event (0-59)
    #[arg(long)]
    pub start_minute: u32,

    /// Stop hour of the event (0-23)
    #[arg(long)]
    pub stop_hour: u32,

    /// Stop minute of the event (0-59)
    #[arg(long)]
    pub stop_minute: u32,

    /// IANA timezone (default from configuration, normally UTC)
    #[arg(long)]
    pub tz: Option<String>,

    /// The RRULE to apply; only the first one is used
    #[arg(required = true, num_args = 1..)]
    pub rrule: Vec<String>,

    /// Separate RRULE for the stop event (defaults to the start RRULE)
    #[arg(long)]
    pub stop_rule: Option<String>,

    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Output values in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the evaluation trace to stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl CliArgs {
    /// ## Summary
    /// Builds the evaluator input, applying `default_timezone` when `--tz`
    /// was not given.
    #[must_use]
    pub fn request(&self, default_timezone: &str) -> WindowRequest {
        let start_rule = self.rrule.first().cloned().unwrap_or_default();
        let stop_rule = self.stop_rule.clone().unwrap_or_else(|| start_rule.clone());

        WindowRequest {
            start_hour: self.start_hour,
            start_minute: self.start_minute,
            start_rule,
            stop_hour: self.stop_hour,
            stop_minute: self.stop_minute,
            stop_rule,
            timezone: self
                .tz
                .clone()
                .unwrap_or_else(|| default_timezone.to_string()),
        }
    }
}
