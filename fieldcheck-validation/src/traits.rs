// Validation traits

use crate::Outcome;

/// A named check over one field value.
///
/// `label` overrides the rule's default field label in messages.
/// Any `Fn(&str, Option<&str>) -> Outcome` closure is a rule.
pub trait Rule: Send + Sync {
    fn check(&self, value: &str, label: Option<&str>) -> Outcome;
}

impl<F> Rule for F
where
    F: Fn(&str, Option<&str>) -> Outcome + Send + Sync,
{
    fn check(&self, value: &str, label: Option<&str>) -> Outcome {
        self(value, label)
    }
}

/// Where error messages are rendered.
///
/// Targets are container ids as produced by [`fix_id`](crate::fix_id).
pub trait TipSink {
    /// Make the container visible and set its text
    fn show(&mut self, target: &str, message: &str, scroll: bool);

    /// Hide the container and clear its text
    fn hide(&mut self, target: &str);

    /// Modal fallback when no container is available
    fn alert(&mut self, message: &str);

    /// Whether a container with this id exists
    fn has_target(&self, target: &str) -> bool;
}
