// Rule dispatch by name

use crate::{Outcome, RuleRegistry, SkipReason};
use std::sync::Arc;
use tracing::{debug, warn};

/// Looks rules up by name and runs them against trimmed values.
///
/// Unknown rule names fail open: the value is let through as
/// [`Outcome::Permissive`].
///
/// # Examples
///
/// ```
/// use fieldcheck_validation::{Dispatcher, RuleRegistry};
///
/// let dispatcher = Dispatcher::new(RuleRegistry::default());
/// assert!(dispatcher.run_rule("email", "  user@example.com ").is_valid());
/// assert!(dispatcher.run_rule("noSuchRule", "<anything>").is_permissive());
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<RuleRegistry>,
}

impl Dispatcher {
    pub fn new(registry: RuleRegistry) -> Self {
        Self::shared(Arc::new(registry))
    }

    pub fn shared(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run `name` with the rule's default label
    pub fn run_rule(&self, name: &str, raw: &str) -> Outcome {
        self.dispatch(name, raw, None)
    }

    /// Run `name` with a caller-supplied label
    pub fn run_rule_with_label(&self, name: &str, raw: &str, label: &str) -> Outcome {
        self.dispatch(name, raw, Some(label))
    }

    fn dispatch(&self, name: &str, raw: &str, label: Option<&str>) -> Outcome {
        let value = raw.trim();
        debug!(rule = %name, value = %value, "Dispatching rule");

        match self.registry.get(name) {
            Some(rule) => rule.check(value, label),
            None => {
                warn!(rule = %name, "Rule not registered, letting value through");
                Outcome::Permissive(SkipReason::UnknownRule(name.to_string()))
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(RuleRegistry::default())
    }
}
