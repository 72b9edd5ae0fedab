// Rule registry

use crate::{Outcome, Rule, builtin};
use fieldcheck_config::Constants;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub type SharedRule = Arc<dyn Rule>;

/// Immutable map from rule name to rule.
///
/// # Examples
///
/// ```
/// use fieldcheck_validation::RuleRegistry;
///
/// let registry = RuleRegistry::default();
/// let rule = registry.get("loginPassword").unwrap();
/// assert_eq!(
///     rule.check("abc", None).message(),
///     Some("password length must be ≥ 6")
/// );
/// assert!(rule.check("abcdef", None).is_valid());
/// ```
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, SharedRule>,
}

impl RuleRegistry {
    pub fn builder(constants: Constants) -> RegistryBuilder {
        RegistryBuilder::new(constants)
    }

    /// Registry holding only the built-in rules
    pub fn with_builtin_rules(constants: Constants) -> Self {
        Self::builder(constants).with_builtin_rules().build()
    }

    pub fn get(&self, name: &str) -> Option<&SharedRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run a rule by name; `None` when no such rule exists
    pub fn check(&self, name: &str, value: &str, label: Option<&str>) -> Option<Outcome> {
        self.get(name).map(|rule| rule.check(value, label))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtin_rules(Constants::default())
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

/// Builder for [`RuleRegistry`]
pub struct RegistryBuilder {
    constants: Constants,
    rules: HashMap<String, SharedRule>,
}

impl RegistryBuilder {
    pub fn new(constants: Constants) -> Self {
        Self {
            constants,
            rules: HashMap::new(),
        }
    }

    /// Install the built-in rule set
    pub fn with_builtin_rules(mut self) -> Self {
        for (name, rule) in builtin::rules(&self.constants) {
            self.rules.insert(name.to_string(), rule);
        }
        self
    }

    /// Add a rule, replacing any rule already under `name`
    pub fn register<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        let name = name.into();
        if self.rules.insert(name.clone(), Arc::new(rule)).is_some() {
            debug!(rule = %name, "Replaced existing rule");
        }
        self
    }

    /// Constants the built-in rules are built from
    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn build(self) -> RuleRegistry {
        debug!(count = self.rules.len(), "Rule registry built");
        RuleRegistry { rules: self.rules }
    }
}
