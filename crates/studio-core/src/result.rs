//! Tagged outcome of a service operation.
//!
//! Every service call that reaches the store successfully yields an
//! [`OperationResult`]: either `Success` carrying the operation's data or
//! a typed failure. Mapping these onto a transport (status codes, JSON
//! envelopes) is left to the caller.

use std::collections::BTreeMap;
use std::fmt;

/// Validation messages grouped by field path (`name`,
/// `conditions[0].startTime`, ...).
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationErrorKind {
    /// Client-correctable: schema violation, duplicate name, dangling
    /// reference, cascading-delete guard.
    ValidationError,
    /// The targeted entity does not exist in the tenant's partition.
    NotFound,
    /// Infrastructure failure translated for the caller.
    InternalError,
}

impl fmt::Display for OperationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ValidationError => "ValidationError",
            Self::NotFound => "NotFound",
            Self::InternalError => "InternalError",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum OperationResult<T = ()> {
    Success(T),
    ValidationError {
        message: String,
        field_errors: Option<FieldErrors>,
    },
    NotFound {
        message: String,
    },
    InternalError {
        message: String,
    },
}

impl OperationResult<()> {
    /// Data-less success.
    pub fn ok() -> Self {
        Self::Success(())
    }
}

impl<T> OperationResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn validation_failure(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn validation_failure_with(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self::ValidationError {
            message: message.into(),
            field_errors: Some(field_errors),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error_kind(&self) -> Option<OperationErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::ValidationError { .. } => Some(OperationErrorKind::ValidationError),
            Self::NotFound { .. } => Some(OperationErrorKind::NotFound),
            Self::InternalError { .. } => Some(OperationErrorKind::InternalError),
        }
    }

    /// Failure message; `None` on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::ValidationError { message, .. }
            | Self::NotFound { message }
            | Self::InternalError { message } => Some(message),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationError { field_errors, .. } => field_errors.as_ref(),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Transform the success data, carrying failures over unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            Self::Success(data) => OperationResult::Success(f(data)),
            Self::ValidationError {
                message,
                field_errors,
            } => OperationResult::ValidationError {
                message,
                field_errors,
            },
            Self::NotFound { message } => OperationResult::NotFound { message },
            Self::InternalError { message } => OperationResult::InternalError { message },
        }
    }
}
