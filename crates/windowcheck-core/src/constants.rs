/// Days between today and the date recurrence rules are anchored to.
///
/// Keeps the anchor at least one full week in the past so weekly rules always
/// have an occurrence on both sides of "now".
pub const SEED_OFFSET_DAYS: u64 = 8;

/// Property name used when echoing a recurrence rule back to callers.
pub const RRULE_PROPERTY: &str = "RRULE";
pub const RRULE_PREFIX: &str = const_str::concat!(RRULE_PROPERTY, ":");

/// Timezone used when neither the caller nor the configuration names one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Environment variable prefix for windowcheck's own settings.
pub const SETTINGS_ENV_PREFIX: &str = "WINDOWCHECK";
pub const SETTINGS_FILE_NAME: &str = "windowcheck.toml";
