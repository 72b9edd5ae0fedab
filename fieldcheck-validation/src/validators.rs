// Generic validator shared by every built-in rule

use crate::{Outcome, SkipReason, ValidationError};
use fieldcheck_config::{Bounds, Patterns};
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Custom check returning an error message. `None` or `""` means valid.
pub type Predicate = Arc<dyn Fn(&str, &str) -> Option<String> + Send + Sync>;

/// How a pattern is applied to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The value must match the pattern
    Positive,
    /// The value must contain no match of the pattern
    Negative,
}

/// Per-call options for [`GenericValidator::validate`].
#[derive(Clone, Default)]
pub struct ValidationOption {
    pub pattern: Option<Regex>,
    pub min_length: Option<usize>,
    pub predicate: Option<Predicate>,
}

impl ValidationOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Minimum length in characters
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str, &str) -> Option<String> + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for ValidationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationOption")
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("min_length", &self.min_length)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Required, min length, predicate and pattern checks, in that order.
#[derive(Debug, Clone)]
pub struct GenericValidator {
    forbidden: Regex,
    digits: Regex,
}

impl GenericValidator {
    pub fn new(forbidden: Regex, digits: Regex) -> Self {
        Self { forbidden, digits }
    }

    pub fn from_patterns(patterns: &Patterns) -> Self {
        Self::new(patterns.forbidden.clone(), patterns.digits.clone())
    }

    /// Pattern used in negative mode when the option carries none
    pub fn forbidden(&self) -> &Regex {
        &self.forbidden
    }

    pub fn validate(
        &self,
        value: &str,
        label: &str,
        mode: Mode,
        option: &ValidationOption,
    ) -> Outcome {
        if value.is_empty() {
            return ValidationError::new(label, format!("please enter: {}", label))
                .with_constraint("required")
                .into();
        }

        if let Some(min) = option.min_length {
            if value.chars().count() < min {
                return ValidationError::new(
                    label,
                    format!("{} length must be ≥ {} characters", label, min),
                )
                .with_constraint("minLength")
                .with_value(value)
                .into();
            }
        }

        let outcome = if let Some(predicate) = &option.predicate {
            match predicate(value, label) {
                Some(message) if !message.is_empty() => ValidationError::new(label, message)
                    .with_value(value)
                    .into(),
                _ => Outcome::Valid,
            }
        } else {
            let pattern = match (&option.pattern, mode) {
                (Some(pattern), _) => pattern,
                (None, Mode::Negative) => &self.forbidden,
                (None, Mode::Positive) => {
                    warn!(label = %label, "No pattern or predicate configured, letting value through");
                    return Outcome::Permissive(SkipReason::NoMatcher {
                        label: label.to_string(),
                    });
                }
            };
            match_pattern(value, label, mode, pattern)
        };

        debug!(label = %label, passed = outcome.passes(), "Generic validation finished");
        outcome
    }

    /// Integer check against inclusive bounds, run in negative mode.
    pub fn int_number_range(&self, value: &str, label: &str, bounds: Bounds) -> Outcome {
        let digits = self.digits.clone();
        let option = ValidationOption::new()
            .predicate(move |value, label| range_message(&digits, value, label, bounds));
        self.validate(value, label, Mode::Negative, &option)
    }

    /// The digits-only pattern
    pub fn digits(&self) -> &Regex {
        &self.digits
    }
}

fn match_pattern(value: &str, label: &str, mode: Mode, pattern: &Regex) -> Outcome {
    match mode {
        Mode::Positive if pattern.is_match(value) => Outcome::Valid,
        Mode::Positive => ValidationError::new(
            label,
            format!("[{}] format invalid, please check and re-enter.", label),
        )
        .with_constraint("pattern")
        .with_value(value)
        .into(),
        Mode::Negative => match pattern.find(value) {
            Some(hit) => ValidationError::new(
                label,
                format!(
                    "[{}] contains disallowed character {}. The following characters are not allowed: {}",
                    label,
                    hit.as_str(),
                    pattern.as_str()
                ),
            )
            .with_constraint("forbidden")
            .with_value(value)
            .into(),
            None => Outcome::Valid,
        },
    }
}

/// Not a number, below min, above max: first failing check wins.
pub fn range_message(digits: &Regex, value: &str, label: &str, bounds: Bounds) -> Option<String> {
    if !digits.is_match(value) {
        return Some(format!("{} must be a number", label));
    }

    // Only overflow can fail once the digits pattern matched.
    let Ok(number) = value.parse::<i64>() else {
        return bounds
            .max
            .map(|max| format!("{} cannot exceed {}", label, max));
    };

    if let Some(min) = bounds.min.filter(|min| number < *min) {
        return Some(format!("{} cannot be less than {}", label, min));
    }
    if let Some(max) = bounds.max.filter(|max| number > *max) {
        return Some(format!("{} cannot exceed {}", label, max));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> GenericValidator {
        GenericValidator::from_patterns(&Patterns::default())
    }

    #[test]
    fn test_empty_value() {
        let outcome = validator().validate("", "name", Mode::Negative, &ValidationOption::new());
        let error = outcome.error().unwrap();
        assert_eq!(error.message, "please enter: name");
        assert_eq!(error.constraint, "required");
    }

    #[test]
    fn test_min_length_precedes_pattern() {
        let option = ValidationOption::new().min_length(5);
        let outcome = validator().validate("<a>", "title", Mode::Negative, &option);
        assert_eq!(
            outcome.message(),
            Some("title length must be ≥ 5 characters")
        );
    }

    #[test]
    fn test_min_length_counts_characters() {
        let option = ValidationOption::new().min_length(2);
        assert!(validator().validate("张三", "name", Mode::Negative, &option).is_valid());
    }

    #[test]
    fn test_positive_mismatch() {
        let option = ValidationOption::new().pattern(Regex::new(r"^\d+$").unwrap());
        let outcome = validator().validate("12a", "code", Mode::Positive, &option);
        assert_eq!(
            outcome.message(),
            Some("[code] format invalid, please check and re-enter.")
        );
        assert!(validator().validate("123", "code", Mode::Positive, &option).is_valid());
    }

    #[test]
    fn test_negative_names_offending_character() {
        let outcome = validator().validate("Acme & Co", "company", Mode::Negative, &ValidationOption::new());
        let message = outcome.message().unwrap();
        assert!(message.starts_with("[company] contains disallowed character &."));
        assert!(message.contains(validator().forbidden().as_str()));
    }

    #[test]
    fn test_predicate_takes_precedence() {
        let option = ValidationOption::new()
            .pattern(Regex::new(r"^never$").unwrap())
            .predicate(|_, _| None);
        assert!(validator().validate("anything", "x", Mode::Positive, &option).is_valid());

        let option = ValidationOption::new().predicate(|_, label| Some(format!("{} nope", label)));
        let outcome = validator().validate("<>", "x", Mode::Negative, &option);
        assert_eq!(outcome.message(), Some("x nope"));
        assert_eq!(outcome.error().unwrap().constraint, "custom");
    }

    #[test]
    fn test_empty_predicate_message_is_valid() {
        let option = ValidationOption::new().predicate(|_, _| Some(String::new()));
        assert!(validator().validate("v", "x", Mode::Positive, &option).is_valid());
    }

    #[test]
    fn test_positive_without_matcher_is_permissive() {
        let outcome = validator().validate("v", "x", Mode::Positive, &ValidationOption::new());
        assert_eq!(
            outcome,
            Outcome::Permissive(SkipReason::NoMatcher { label: "x".into() })
        );
        assert!(outcome.passes());
    }

    #[test]
    fn test_int_number_range() {
        let v = validator();
        let bounds = Bounds::between(1, 5);

        assert_eq!(v.int_number_range("6", "count", bounds).message(), Some("count cannot exceed 5"));
        assert_eq!(v.int_number_range("0", "count", bounds).message(), Some("count cannot be less than 1"));
        assert_eq!(v.int_number_range("abc", "count", bounds).message(), Some("count must be a number"));
        assert_eq!(v.int_number_range("", "count", bounds).message(), Some("please enter: count"));
        assert!(v.int_number_range("3", "count", bounds).is_valid());
    }

    #[test]
    fn test_int_number_range_overflow() {
        let v = validator();
        let huge = "99999999999999999999999";
        assert_eq!(
            v.int_number_range(huge, "count", Bounds::at_most(10)).message(),
            Some("count cannot exceed 10")
        );
        assert!(v.int_number_range(huge, "count", Bounds::default()).is_valid());
    }
}
