// Built-in rule set

use crate::validators::range_message;
use crate::{GenericValidator, Mode, Outcome, SharedRule, ValidationError, ValidationOption};
use fieldcheck_config::{Bounds, Constants};
use std::sync::Arc;

/// Registry keys of the built-in rules.
pub mod names {
    pub const TELEPHONE: &str = "telephone";
    pub const EMAIL: &str = "email";
    pub const EMAIL_OR_TELEPHONE: &str = "emailOrTelephone";
    pub const DOMAIN_PREFIX: &str = "domainPrefix";
    pub const DESCRIBE: &str = "describe";
    pub const DAY: &str = "day";
    pub const DAY_TIME: &str = "dayTime";
    pub const USER_NAME: &str = "userName";
    pub const CONTACT: &str = "contact";
    pub const SALESMAN_NAME: &str = "salesmanName";
    pub const SALESMAN_TEL: &str = "salesmanTel";
    pub const CUSTOMER_COMPANY_NAME: &str = "customerCompanyName";
    pub const CUSTOMER_IMPORTANCE: &str = "customerImportance";
    pub const JOB_TITLE: &str = "jobTitle";
    pub const ACTIVITY_NAME: &str = "activityName";
    pub const ACTIVITY_ADDRESS: &str = "activityAddress";
    pub const CORPORATE_NAME: &str = "corporateName";
    pub const STOCK_CODE: &str = "stockCode";
    pub const INDUSTRY: &str = "industry";
    pub const INVITER_NAME: &str = "inviterName";
    pub const ROOM_NAME: &str = "roomName";
    pub const ROOM_ADDRESS: &str = "roomAddress";
    pub const ROOM_BASE_COUNT: &str = "roomBaseCount";
    pub const ROOM_CAPACITY: &str = "roomCapacity";
    pub const CORPORATE_AND_SPEAKER: &str = "corporateAndSpeaker";
    pub const CUSTOMER_WELCOME: &str = "customerWelcome";
    pub const LOGIN_PASSWORD: &str = "loginPassword";
    pub const CAPTCHA: &str = "captcha";
    pub const COMPANY_NAME: &str = "companyName";
    pub const TOPIC: &str = "topic";
    pub const COOPERATION_NAME: &str = "cooperationName";
    pub const SUPER_ADMIN_RANGE: &str = "superAdminRange";
    pub const ADMIN_RANGE: &str = "adminRange";
    pub const SALES_RANGE: &str = "salesRange";
    pub const INVITER_RANGE: &str = "inviterRange";
}

const PASSWORD_MIN_LENGTH: usize = 6;
const IMPORTANCE: Bounds = Bounds::between(1, 5);

/// Build every built-in rule against `constants`.
pub(crate) fn rules(constants: &Constants) -> Vec<(&'static str, SharedRule)> {
    use names::*;

    let v = GenericValidator::from_patterns(&constants.patterns);
    let p = &constants.patterns;
    let room = constants.limits.room;
    let users = constants.limits.cooperation_users;

    let telephone = checked(
        &v,
        "mobile number",
        Mode::Positive,
        ValidationOption::new().pattern(p.mobile.clone()).min_length(7),
    );
    let domain_prefix = checked(
        &v,
        "domain or URL",
        Mode::Positive,
        ValidationOption::new().pattern(p.domain_prefix.clone()).min_length(2),
    );

    let (email, mobile) = (p.email.clone(), p.mobile.clone());
    let email_or_telephone = ValidationOption::new()
        .min_length(7)
        .predicate(move |value, label| {
            (!email.is_match(value) && !mobile.is_match(value))
                .then(|| format!("{} format incorrect, please re-enter", label))
        });

    let digits = p.digits.clone();
    let importance = ValidationOption::new().predicate(move |value, label| {
        if !digits.is_match(value) {
            return Some(format!("{} must be a number", label));
        }
        let in_range = value.parse().is_ok_and(|n| IMPORTANCE.contains(n));
        (!in_range).then(|| format!("{} cannot exceed the range 1~5", label))
    });

    vec![
        (TELEPHONE, telephone.clone()),
        (
            EMAIL,
            checked(
                &v,
                "email",
                Mode::Positive,
                ValidationOption::new().pattern(p.email.clone()).min_length(7),
            ),
        ),
        (
            EMAIL_OR_TELEPHONE,
            checked(&v, "email or mobile number", Mode::Positive, email_or_telephone),
        ),
        (DOMAIN_PREFIX, domain_prefix.clone()),
        (DESCRIBE, free_text(&v, "description", 20)),
        (DAY, picked(&v, "start or end date")),
        (DAY_TIME, picked(&v, "start or end time")),
        (USER_NAME, free_text(&v, "name", 2)),
        (CONTACT, free_text(&v, "contact", 2)),
        (SALESMAN_NAME, free_text(&v, "salesman name", 2)),
        (SALESMAN_TEL, delegate(telephone, "salesman phone")),
        (CUSTOMER_COMPANY_NAME, free_text(&v, "company name", 2)),
        (
            CUSTOMER_IMPORTANCE,
            checked(&v, "customer importance", Mode::Negative, importance),
        ),
        (JOB_TITLE, free_text(&v, "job title", 2)),
        (ACTIVITY_NAME, free_text(&v, "activity name", 5)),
        (ACTIVITY_ADDRESS, free_text(&v, "activity address", 4)),
        (CORPORATE_NAME, free_text(&v, "attending company name", 2)),
        (
            STOCK_CODE,
            checked(
                &v,
                "stock code",
                Mode::Positive,
                ValidationOption::new().pattern(p.domain_prefix.clone()).min_length(3),
            ),
        ),
        (INDUSTRY, free_text(&v, "industry", 2)),
        (INVITER_NAME, free_text(&v, "researcher name", 2)),
        (ROOM_NAME, free_text(&v, "room name", 2)),
        (ROOM_ADDRESS, free_text(&v, "room address", 4)),
        (
            ROOM_BASE_COUNT,
            counted(&v, "room count", Bounds::at_most(room.max_count)),
        ),
        (
            ROOM_CAPACITY,
            counted(&v, "room capacity", Bounds::at_most(room.max_capacity)),
        ),
        (
            CORPORATE_AND_SPEAKER,
            free_text(&v, "attending company or speaker name", 2),
        ),
        (CUSTOMER_WELCOME, free_text(&v, "customer welcome text", 20)),
        (LOGIN_PASSWORD, Arc::new(login_password) as SharedRule),
        (CAPTCHA, delegate(domain_prefix, "captcha")),
        (COMPANY_NAME, free_text(&v, "organization or company name", 2)),
        (TOPIC, free_text(&v, "speech topic", 5)),
        (COOPERATION_NAME, free_text(&v, "company name", 2)),
        (
            SUPER_ADMIN_RANGE,
            ranged(&v, "super admin count", users.super_admin),
        ),
        (ADMIN_RANGE, ranged(&v, "admin count", users.admin)),
        (SALES_RANGE, ranged(&v, "sales count", users.sales)),
        (INVITER_RANGE, ranged(&v, "researcher count", users.researcher)),
    ]
}

/// Generic validator with a fixed mode and option
fn checked(
    v: &GenericValidator,
    default_label: &'static str,
    mode: Mode,
    option: ValidationOption,
) -> SharedRule {
    let v = v.clone();
    Arc::new(move |value: &str, label: Option<&str>| {
        v.validate(value, label.unwrap_or(default_label), mode, &option)
    })
}

/// Free text: minimum length, no forbidden characters
fn free_text(v: &GenericValidator, default_label: &'static str, min: usize) -> SharedRule {
    checked(v, default_label, Mode::Negative, ValidationOption::new().min_length(min))
}

fn ranged(v: &GenericValidator, default_label: &'static str, bounds: Bounds) -> SharedRule {
    let v = v.clone();
    Arc::new(move |value: &str, label: Option<&str>| {
        v.int_number_range(value, label.unwrap_or(default_label), bounds)
    })
}

/// Room quantities: at least one character, then the range check
fn counted(v: &GenericValidator, default_label: &'static str, bounds: Bounds) -> SharedRule {
    let digits = v.digits().clone();
    let option = ValidationOption::new()
        .min_length(1)
        .predicate(move |value, label| range_message(&digits, value, label, bounds));
    checked(v, default_label, Mode::Negative, option)
}

/// Values filled in by a picker: present and long enough is all we check
fn picked(v: &GenericValidator, default_label: &'static str) -> SharedRule {
    let option = ValidationOption::new().min_length(8).predicate(|_, _| None);
    checked(v, default_label, Mode::Positive, option)
}

/// Reuse another rule under a different default label
fn delegate(target: SharedRule, default_label: &'static str) -> SharedRule {
    Arc::new(move |value: &str, label: Option<&str>| {
        target.check(value, Some(label.unwrap_or(default_label)))
    })
}

fn login_password(value: &str, label: Option<&str>) -> Outcome {
    let field = label.unwrap_or("password");
    if value.is_empty() {
        ValidationError::new(field, "password cannot be empty")
            .with_constraint("required")
            .into()
    } else if value.chars().count() < PASSWORD_MIN_LENGTH {
        ValidationError::new(
            field,
            format!("password length must be ≥ {}", PASSWORD_MIN_LENGTH),
        )
        .with_constraint("minLength")
        .into()
    } else {
        Outcome::Valid
    }
}
