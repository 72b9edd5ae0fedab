//! Fuzz target for whole-form passes.
//!
//! Single scope never reports more than one error. All scope shows every
//! failed field in its declared tip or alerts it.

#![no_main]

use arbitrary::Arbitrary;
use fieldcheck_validation::{
    Dispatcher, Field, FormOptions, FormValidator, MemoryTips, TipContainer,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzField {
    rule: String,
    value: String,
}

#[derive(Debug, Arbitrary)]
struct FuzzForm {
    fields: Vec<FuzzField>,
    use_builtin_names: bool,
}

const RULES: &[&str] = &["email", "userName", "roomCapacity", "loginPassword", "adminRange"];

fuzz_target!(|data: FuzzForm| {
    let fields: Vec<Field> = data
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let rule = if data.use_builtin_names {
                RULES[i % RULES.len()].to_string()
            } else {
                f.rule.clone()
            };
            Field::new(rule, f.value.clone()).with_tip_target(format!("tip_{}", i))
        })
        .collect();

    let single = FormValidator::new(Dispatcher::default(), FormOptions::single("box"));
    assert!(single.check(&fields).errors.len() <= 1);

    let all = FormValidator::new(Dispatcher::default(), FormOptions::all());
    let mut tips = MemoryTips::new();
    for i in (0..fields.len()).step_by(2) {
        tips.add_container(&format!("tip_{}", i), TipContainer::default());
    }
    let report = all.validate(&fields, &mut tips);
    let mut alerted = 0;
    for failed in &report.errors {
        match tips.container(&format!("tip_{}", failed.index)) {
            Some(tip) => assert!(tip.visible),
            None => alerted += 1,
        }
    }
    assert_eq!(tips.alerts().len(), alerted);
    assert!(tips.missed_targets().is_empty());
});
