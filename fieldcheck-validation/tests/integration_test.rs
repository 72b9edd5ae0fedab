//! Integration tests for fieldcheck-validation

use fieldcheck_config::{Bounds, Constants};
use fieldcheck_validation::*;
use std::io::Write;

#[test]
fn test_every_builtin_accepts_a_plain_value() {
    let dispatcher = Dispatcher::default();
    let samples = [
        ("telephone", "13800138000"),
        ("email", "user@example.com"),
        ("emailOrTelephone", "13800138000"),
        ("domainPrefix", "events"),
        ("describe", "Two days of talks on storage engines"),
        ("day", "2024-06-01"),
        ("dayTime", "2024-06-01 14:00"),
        ("userName", "Zhang Wei"),
        ("contact", "Li Na"),
        ("salesmanName", "Chen Jie"),
        ("salesmanTel", "13912345678"),
        ("customerCompanyName", "Acme Ltd"),
        ("customerImportance", "4"),
        ("jobTitle", "Analyst"),
        ("activityName", "Spring Summit"),
        ("activityAddress", "Hall 2, Expo Center"),
        ("corporateName", "Acme Ltd"),
        ("stockCode", "600519"),
        ("industry", "Energy"),
        ("inviterName", "Zhou Min"),
        ("roomName", "Room A"),
        ("roomAddress", "Floor 12"),
        ("roomBaseCount", "3"),
        ("roomCapacity", "120"),
        ("corporateAndSpeaker", "Acme and Dr. Wu"),
        ("customerWelcome", "Welcome to the partner summit, enjoy!"),
        ("loginPassword", "hunter22"),
        ("captcha", "7fk2"),
        ("companyName", "Acme Ltd"),
        ("topic", "Rates outlook"),
        ("cooperationName", "Acme Ltd"),
        ("superAdminRange", "1"),
        ("adminRange", "2"),
        ("salesRange", "10"),
        ("inviterRange", "25"),
    ];

    let mut covered: Vec<&str> = Vec::new();
    for (rule, value) in samples {
        let outcome = dispatcher.run_rule(rule, value);
        assert!(outcome.is_valid(), "{} rejected {:?}: {:?}", rule, value, outcome);
        covered.push(rule);
    }
    covered.sort_unstable();
    assert_eq!(covered, dispatcher.registry().names());
}

#[test]
fn test_negative_rule_names_character() {
    let dispatcher = Dispatcher::default();
    let outcome = dispatcher.run_rule("companyName", "Acme;DROP");
    assert!(outcome.message().unwrap().contains("disallowed character ;"));
}

#[test]
fn test_min_length_reported_before_forbidden_characters() {
    let dispatcher = Dispatcher::default();
    let outcome = dispatcher.run_rule("topic", "<%>");
    assert_eq!(outcome.message(), Some("speech topic length must be ≥ 5 characters"));
}

#[test]
fn test_numeric_range_scenarios() {
    let v = GenericValidator::from_patterns(&Constants::default().patterns);
    let bounds = Bounds::between(1, 5);

    assert!(v.int_number_range("6", "quota", bounds).message().unwrap().contains("cannot exceed 5"));
    assert!(v.int_number_range("abc", "quota", bounds).message().unwrap().contains("must be a number"));
    assert!(v.int_number_range("3", "quota", bounds).is_valid());
}

#[test]
fn test_unknown_rule_is_permissive() {
    let dispatcher = Dispatcher::default();
    let outcome = dispatcher.run_rule("attendee", "");
    assert!(outcome.is_permissive());
    assert!(outcome.passes());
}

#[test]
fn test_dispatcher_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[limits.cooperation_users.sales]\nmin = 2\nmax = 4").unwrap();

    let dispatcher = dispatcher_from_file(file.path()).unwrap();
    assert_eq!(
        dispatcher.run_rule("salesRange", "1").message(),
        Some("sales count cannot be less than 2")
    );
    assert!(dispatcher.run_rule("salesRange", "4").is_valid());
}

#[test]
fn test_registry_shared_across_threads() {
    let dispatcher = Dispatcher::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || dispatcher.run_rule("roomCapacity", &i.to_string()).is_valid())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_validation_error_creation() {
    let error = ValidationError::new("email", "invalid email format").with_kind(3);

    assert_eq!(error.field, "email");
    assert_eq!(error.message, "invalid email format");
    assert_eq!(error.kind, 3);
    assert_eq!(error.to_string(), "invalid email format");
}
