// Validation errors and rule outcomes

use serde::Serialize;
use std::fmt;

/// A value failed a rule. This is a user-facing message, not a program fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Label of the field that failed validation
    pub field: String,

    /// Error message
    pub message: String,

    /// Validation constraint that failed
    pub constraint: String,

    /// Numeric tag carried for callers that switch on it; always 0 from built-in rules
    #[serde(rename = "type")]
    pub kind: u32,

    /// Value that failed validation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            kind: 0,
            value: None,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the numeric tag
    pub fn with_kind(mut self, kind: u32) -> Self {
        self.kind = kind;
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Why a rule let a value through without checking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No rule is registered under this name
    UnknownRule(String),
    /// The rule resolved neither a pattern nor a predicate
    NoMatcher { label: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownRule(name) => write!(f, "rule `{}` is not registered", name),
            SkipReason::NoMatcher { label } => {
                write!(f, "no pattern or predicate configured for {}", label)
            }
        }
    }
}

/// Result of running one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rule ran and the value passed
    Valid,
    /// The rule ran and the value failed
    Invalid(ValidationError),
    /// The rule was skipped and the value let through
    Permissive(SkipReason),
}

impl Outcome {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Outcome::Invalid(ValidationError::new(field, message))
    }

    /// True unless the value failed. Skipped checks pass.
    pub fn passes(&self) -> bool {
        !matches!(self, Outcome::Invalid(_))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    pub fn is_permissive(&self) -> bool {
        matches!(self, Outcome::Permissive(_))
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Outcome::Invalid(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Outcome::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// Message of a failed check, if any
    pub fn message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }
}

impl From<ValidationError> for Outcome {
    fn from(error: ValidationError) -> Self {
        Outcome::Invalid(error)
    }
}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}
