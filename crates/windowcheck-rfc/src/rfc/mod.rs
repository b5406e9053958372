pub mod recurrence;
pub mod timezone;

pub use recurrence::{OccurrenceSequence, RecurrencePattern};
pub use timezone::{ConversionError, TimeZoneResolver, localize, localize_lenient};
