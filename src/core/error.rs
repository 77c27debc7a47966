use thiserror::Error;

use super::types::TenantId;

/// Errors that can occur while computing, numbering or assembling invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BahiError {
    /// Caller input was rejected before anything was applied.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No counter has been provisioned for this tenant and prefix.
    #[error("no invoice counter provisioned for tenant '{tenant_id}' with prefix '{prefix}'")]
    CounterNotFound { tenant_id: TenantId, prefix: String },

    /// The counter could not be advanced. The whole assembly may be retried.
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// Counter provisioning misuse.
    #[error("numbering error: {0}")]
    Numbering(String),
}

impl BahiError {
    /// Whether retrying the entire operation could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Allocation(_))
    }
}

pub type Result<T, E = BahiError> = std::result::Result<T, E>;

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "lines[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<Vec<ValidationError>> for BahiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        BahiError::Validation(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_allocation_is_retryable() {
        assert!(BahiError::Allocation("lock poisoned".into()).is_retryable());
        assert!(!BahiError::Validation("empty".into()).is_retryable());
        assert!(
            !BahiError::CounterNotFound {
                tenant_id: TenantId::new("t1"),
                prefix: "INV".into(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn validation_errors_join() {
        let err: BahiError = vec![
            ValidationError::new("lines", "at least one line item is required"),
            ValidationError::new("prefix", "must not be empty"),
        ]
        .into();
        assert_eq!(
            err.to_string(),
            "validation failed: lines: at least one line item is required; prefix: must not be empty"
        );
    }

    #[test]
    fn counter_not_found_message() {
        let err = BahiError::CounterNotFound {
            tenant_id: TenantId::new("t1"),
            prefix: "INV".into(),
        };
        assert_eq!(
            err.to_string(),
            "no invoice counter provisioned for tenant 't1' with prefix 'INV'"
        );
    }
}
