// Whole-form validation pass

use crate::{Dispatcher, Outcome, TipSink, ValidationError, ValidationErrors, fix_id};
use serde::Serialize;
use tracing::debug;

/// How many errors a pass reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Stop at the first failing field and show it in the shared container
    #[default]
    Single,
    /// Check every field and show each error in the field's own container
    All,
}

/// One input to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub rule: String,
    pub value: String,
    pub label: Option<String>,
    /// Container for this field's error in [`Scope::All`]; alerted when unset or undeclared
    pub tip_target: Option<String>,
}

impl Field {
    pub fn new(rule: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            value: value.into(),
            label: None,
            tip_target: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_tip_target(mut self, target: impl Into<String>) -> Self {
        self.tip_target = Some(target.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    pub scope: Scope,
    /// Shared container for [`Scope::Single`]; without it errors are alerted
    pub tips_id: Option<String>,
    /// Ask the sink to scroll after showing an error
    pub scroll_on_error: bool,
}

impl FormOptions {
    pub fn single(tips_id: impl Into<String>) -> Self {
        Self {
            scope: Scope::Single,
            tips_id: Some(tips_id.into()),
            scroll_on_error: false,
        }
    }

    pub fn all() -> Self {
        Self {
            scope: Scope::All,
            ..Self::default()
        }
    }

    pub fn scroll(mut self, scroll: bool) -> Self {
        self.scroll_on_error = scroll;
        self
    }
}

/// A failed field and where it sits in the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub index: usize,
    pub rule: String,
    #[serde(flatten)]
    pub error: ValidationError,
}

/// Result of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub errors: Vec<FieldError>,
    /// Fields whose rule was skipped, by index
    #[serde(skip)]
    pub skipped: Vec<usize>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors.into_iter().map(|e| e.error).collect::<Vec<_>>().into()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "valid": self.is_valid(), "errors": self.errors })
    }
}

/// Runs fields through a [`Dispatcher`] in order and renders the errors.
///
/// # Examples
///
/// ```
/// use fieldcheck_validation::*;
///
/// let form = FormValidator::new(Dispatcher::default(), FormOptions::single("errorTipsBox"));
/// let mut tips = MemoryTips::new().with_container("errorTipsBox", TipContainer::with_holder());
///
/// let report = form.validate(
///     &[Field::new("corporateName", "Acme"), Field::new("email", "nope")],
///     &mut tips,
/// );
///
/// assert!(!report.is_valid());
/// assert_eq!(
///     tips.container("errorTipsBox").unwrap().displayed(),
///     "email length must be ≥ 7 characters"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    dispatcher: Dispatcher,
    options: FormOptions,
}

impl FormValidator {
    pub fn new(dispatcher: Dispatcher, options: FormOptions) -> Self {
        Self {
            dispatcher,
            options,
        }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Check fields without rendering anything
    pub fn check(&self, fields: &[Field]) -> FormReport {
        let mut report = FormReport::default();

        for (index, field) in fields.iter().enumerate() {
            let outcome = match &field.label {
                Some(label) => self
                    .dispatcher
                    .run_rule_with_label(&field.rule, &field.value, label),
                None => self.dispatcher.run_rule(&field.rule, &field.value),
            };

            match outcome {
                Outcome::Valid => {}
                Outcome::Permissive(_) => report.skipped.push(index),
                Outcome::Invalid(error) => {
                    report.errors.push(FieldError {
                        index,
                        rule: field.rule.clone(),
                        error,
                    });
                    if self.options.scope == Scope::Single {
                        break;
                    }
                }
            }
        }

        debug!(
            fields = fields.len(),
            errors = report.errors.len(),
            "Form validation finished"
        );
        report
    }

    /// Check fields and render errors into `sink`
    pub fn validate<S: TipSink>(&self, fields: &[Field], sink: &mut S) -> FormReport {
        let report = self.check(fields);
        let scroll = self.options.scroll_on_error;

        match self.options.scope {
            Scope::Single => {
                if let Some(first) = report.first() {
                    let target = self.options.tips_id.as_deref().map(fix_id);
                    show_or_alert(sink, target.as_deref(), &first.error.message, scroll);
                }
            }
            Scope::All => {
                for failed in &report.errors {
                    let target = fields[failed.index].tip_target.as_deref();
                    show_or_alert(sink, target, &failed.error.message, scroll);
                }
            }
        }

        report
    }

    /// Hide the tip belonging to `field`, as when the user edits it
    pub fn clear<S: TipSink>(&self, field: &Field, sink: &mut S) {
        let target = match self.options.scope {
            Scope::Single => self.options.tips_id.as_deref(),
            Scope::All => field.tip_target.as_deref(),
        };
        if let Some(target) = target {
            sink.hide(target);
        }
    }
}

/// Show in `target` when the sink has it, otherwise alert
fn show_or_alert<S: TipSink>(sink: &mut S, target: Option<&str>, message: &str, scroll: bool) {
    match target {
        Some(target) if sink.has_target(target) => sink.show(target, message, scroll),
        _ => sink.alert(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryTips, TipContainer};

    fn fields() -> Vec<Field> {
        vec![
            Field::new("inviterName", "Wang Fang").with_tip_target("name_tips"),
            Field::new("corporateName", "A").with_tip_target("corporateName_tips"),
            Field::new("industry", "Bio<tech>").with_tip_target("industry_tips"),
        ]
    }

    #[test]
    fn test_single_stops_at_first_error() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::single("box"));
        let report = form.check(&fields());

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].index, 1);
        assert_eq!(report.errors[0].rule, "corporateName");
    }

    #[test]
    fn test_single_without_container_alerts() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::default());
        let mut tips = MemoryTips::new();
        form.validate(&fields(), &mut tips);

        assert_eq!(
            tips.alerts(),
            ["attending company name length must be ≥ 2 characters".to_string()]
        );
    }

    #[test]
    fn test_single_missing_container_alerts() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::single("gone"));
        let mut tips = MemoryTips::new();
        form.validate(&fields(), &mut tips);

        assert_eq!(tips.alerts().len(), 1);
        assert!(tips.container("gone").is_none());
    }

    #[test]
    fn test_all_shows_each_error() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::all().scroll(true));
        let mut tips = MemoryTips::new()
            .with_container("name_tips", TipContainer::default())
            .with_container("corporateName_tips", TipContainer::default())
            .with_container("industry_tips", TipContainer::with_holder());
        let report = form.validate(&fields(), &mut tips);

        assert_eq!(report.errors.len(), 2);
        assert!(!tips.container("name_tips").unwrap().visible);
        assert!(tips.container("corporateName_tips").unwrap().visible);
        assert!(
            tips.container("industry_tips")
                .unwrap()
                .displayed()
                .contains("disallowed character <")
        );
        assert_eq!(tips.scroll_requests(), 2);
        assert!(tips.alerts().is_empty());
    }

    #[test]
    fn test_all_without_tip_target_alerts() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::all());
        let mut tips =
            MemoryTips::new().with_container("industry_tips", TipContainer::with_holder());
        let fields = vec![
            Field::new("corporateName", "A"),
            Field::new("industry", "Bio<tech>").with_tip_target("industry_tips"),
            Field::new("jobTitle", "").with_tip_target("undeclared_tips"),
        ];

        let report = form.validate(&fields, &mut tips);

        assert_eq!(report.errors.len(), 3);
        assert_eq!(
            tips.alerts(),
            [
                "attending company name length must be ≥ 2 characters".to_string(),
                "please enter: job title".to_string(),
            ]
        );
        assert!(tips.container("industry_tips").unwrap().visible);
        assert!(tips.missed_targets().is_empty());
    }

    #[test]
    fn test_skipped_fields_are_reported() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::all());
        let report = form.check(&[Field::new("attendee", ""), Field::new("email", "ab@cd.com")]);

        assert!(report.is_valid());
        assert_eq!(report.skipped, vec![0]);
    }

    #[test]
    fn test_labels_and_json() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::all());
        let report = form.check(&[Field::new("jobTitle", "").with_label("position")]);

        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["message"], "please enter: position");
        assert_eq!(json["errors"][0]["rule"], "jobTitle");
        assert_eq!(json["errors"][0]["index"], 0);

        let errors = report.into_errors();
        assert_eq!(errors.get_field_errors("position").len(), 1);
    }

    #[test]
    fn test_clear_hides_tip() {
        let form = FormValidator::new(Dispatcher::default(), FormOptions::all());
        let mut tips =
            MemoryTips::new().with_container("industry_tips", TipContainer::with_holder());
        let fields = fields();

        form.validate(&fields, &mut tips);
        assert!(tips.container("industry_tips").unwrap().visible);

        form.clear(&fields[2], &mut tips);
        let container = tips.container("industry_tips").unwrap();
        assert!(!container.visible);
        assert_eq!(container.displayed(), "");
    }
}
