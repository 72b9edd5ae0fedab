//! Named form-field validation rules for fieldcheck
//!
//! A [`RuleRegistry`] maps rule names to checks built from a shared
//! [`GenericValidator`]. The [`Dispatcher`] runs a rule by name against a
//! trimmed value, and [`FormValidator`] runs a whole list of fields and
//! renders errors through a [`TipSink`].
//!
//! Configuration problems never block input: an unknown rule name or a rule
//! with nothing to match against yields [`Outcome::Permissive`].
//!
//! # Examples
//!
//! ## Running a Rule
//!
//! ```
//! use fieldcheck_validation::{Dispatcher, RuleRegistry};
//!
//! let dispatcher = Dispatcher::new(RuleRegistry::default());
//!
//! let outcome = dispatcher.run_rule("customerImportance", "7");
//! assert!(outcome.message().unwrap().contains("1~5"));
//!
//! assert!(dispatcher.run_rule("customerImportance", "3").is_valid());
//! ```
//!
//! ## Custom Rules
//!
//! ```
//! use fieldcheck_config::Constants;
//! use fieldcheck_validation::{GenericValidator, Mode, Outcome, RuleRegistry, ValidationOption};
//!
//! let constants = Constants::default();
//! let validator = GenericValidator::from_patterns(&constants.patterns);
//!
//! let registry = RuleRegistry::builder(constants)
//!     .with_builtin_rules()
//!     .register("nickname", move |value: &str, label: Option<&str>| {
//!         let option = ValidationOption::new().min_length(3);
//!         validator.validate(value, label.unwrap_or("nickname"), Mode::Negative, &option)
//!     })
//!     .build();
//!
//! let outcome = registry.check("nickname", "ab", None).unwrap();
//! assert_eq!(outcome.message(), Some("nickname length must be ≥ 3 characters"));
//! assert!(matches!(registry.check("nickname", "abc", None), Some(Outcome::Valid)));
//! ```

mod builtin;
mod dispatch;
mod errors;
mod form;
mod presentation;
mod rules;
mod traits;
mod validators;

pub use builtin::names;
pub use dispatch::*;
pub use errors::*;
pub use form::*;
pub use presentation::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;

use fieldcheck_config::{Constants, Result};
use std::path::Path;

/// Build a dispatcher from a constants file layered over the defaults.
pub fn dispatcher_from_file(path: impl AsRef<Path>) -> Result<Dispatcher> {
    let constants = Constants::builder()
        .add_file(path.as_ref().to_path_buf())
        .build()?;
    Ok(Dispatcher::new(RuleRegistry::with_builtin_rules(constants)))
}
