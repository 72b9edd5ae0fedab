// fieldcheck - named form-field validation rules
//
// Re-exports the rule registry, dispatcher and form pass together with the
// constants they are built from.

pub mod logging;

// Re-export the workspace crates
pub use fieldcheck_config as config;
pub use fieldcheck_validation as validation;

pub use fieldcheck_config::{Constants, ConstantsBuilder};
pub use fieldcheck_validation::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Constants, Dispatcher, Field, FormOptions, FormReport, FormValidator, MemoryTips, Mode,
        Outcome, Rule, RuleRegistry, Scope, TipSink, ValidationError, ValidationOption, names,
    };
}
