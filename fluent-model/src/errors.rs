use thiserror::Error;

/// Top-level error type returned by name-addressed model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Validation failed for one or more fields.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// The model declares no field with this name.
    #[error("model `{model}` has no field `{field}`")]
    UnknownField { model: String, field: String },

    /// The model's setter registry has no method with this name.
    #[error("model `{model}` has no fluent setter `{method}`")]
    UnknownSetter { model: String, method: String },

    /// A dynamically supplied value could not be converted to the field type.
    #[error("invalid value for field `{field}`: {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Payload (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collection of validation issues encountered while assigning or checking a model.
#[derive(Debug, Clone, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, code, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Re-roots every issue under `prefix`, so `title` becomes `unwound.title`.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self::new(self.issues.into_iter().map(|issue| ValidationIssue {
            field: format!("{}.{}", prefix, issue.field),
            ..issue
        }))
    }

    /// Returns the first issue reported for `field`, if any.
    pub fn issue_for(&self, field: &str) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

/// Detailed validation failure for a single field or logical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
