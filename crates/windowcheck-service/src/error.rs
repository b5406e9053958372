use thiserror::Error;
use windowcheck_core::types::ScheduleField;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid schedule spec for `{field}`: {reason}")]
    InvalidScheduleSpec {
        field: ScheduleField,
        reason: String,
    },

    #[error("Missing parameter: {0}")]
    MissingParameter(ScheduleField),
}

impl ServiceError {
    pub(crate) fn invalid(field: ScheduleField, reason: impl std::fmt::Display) -> Self {
        Self::InvalidScheduleSpec {
            field,
            reason: reason.to_string(),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
