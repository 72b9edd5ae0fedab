//! Fuzz target for rule dispatch.
//!
//! Every rule must return an outcome for arbitrary input without
//! panicking, and a failed check must always carry a message.

#![no_main]

use arbitrary::Arbitrary;
use fieldcheck_validation::{Dispatcher, Outcome};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Index into the registered names; out of range uses `rule_name`
    rule_index: u8,
    rule_name: String,
    value: String,
    label: Option<String>,
}

fn dispatcher() -> &'static Dispatcher {
    static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();
    DISPATCHER.get_or_init(Dispatcher::default)
}

fuzz_target!(|data: FuzzInput| {
    let dispatcher = dispatcher();
    let names = dispatcher.registry().names();
    let name = names
        .get(data.rule_index as usize)
        .copied()
        .unwrap_or(data.rule_name.as_str());

    let outcome = match &data.label {
        Some(label) => dispatcher.run_rule_with_label(name, &data.value, label),
        None => dispatcher.run_rule(name, &data.value),
    };

    if let Outcome::Invalid(error) = &outcome {
        assert!(!error.message.is_empty());
    }

    if !dispatcher.registry().contains(name) {
        assert!(outcome.is_permissive());
    }
});
