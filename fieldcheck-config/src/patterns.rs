// Named regular expressions used by the validation rules

use crate::{ConfigError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Mainland mobile numbers: 11 digits starting with 13-19.
pub const MOBILE: &str = r"^1[3-9]\d{9}$";

pub const EMAIL: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// A domain label or URL path fragment. Also reused for stock codes and captchas.
pub const DOMAIN_PREFIX: &str = r"^[A-Za-z0-9]+(?:[-_.][A-Za-z0-9]+)*$";

/// Characters free text fields may not contain. Unanchored: any match is a hit.
pub const FORBIDDEN: &str = r#"[<>"'%;&\\/{}|^$*#~`]"#;

pub const DIGITS: &str = r"^[0-9]+$";

static DEFAULT_PATTERNS: Lazy<Patterns> =
    Lazy::new(|| Patterns::compile(&PatternSource::default()).unwrap());

/// Pattern sources as they appear in a constants file.
///
/// Every key is optional; missing keys keep the built-in pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSource {
    pub mobile: String,
    pub email: String,
    pub domain_prefix: String,
    pub forbidden: String,
    pub digits: String,
}

impl Default for PatternSource {
    fn default() -> Self {
        Self {
            mobile: MOBILE.to_string(),
            email: EMAIL.to_string(),
            domain_prefix: DOMAIN_PREFIX.to_string(),
            forbidden: FORBIDDEN.to_string(),
            digits: DIGITS.to_string(),
        }
    }
}

impl PatternSource {
    /// Override a single pattern by its key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, source: impl Into<String>) -> bool {
        let slot = match key {
            "mobile" => &mut self.mobile,
            "email" => &mut self.email,
            "domain_prefix" => &mut self.domain_prefix,
            "forbidden" => &mut self.forbidden,
            "digits" => &mut self.digits,
            _ => return false,
        };
        *slot = source.into();
        true
    }
}

/// Compiled pattern set.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub mobile: Regex,
    pub email: Regex,
    pub domain_prefix: Regex,
    pub forbidden: Regex,
    pub digits: Regex,
}

impl Patterns {
    /// Compile every source, naming the first one that fails.
    pub fn compile(source: &PatternSource) -> Result<Self> {
        Ok(Self {
            mobile: compile("mobile", &source.mobile)?,
            email: compile("email", &source.email)?,
            domain_prefix: compile("domain_prefix", &source.domain_prefix)?,
            forbidden: compile("forbidden", &source.forbidden)?,
            digits: compile("digits", &source.digits)?,
        })
    }
}

impl Default for Patterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

fn compile(name: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|source| ConfigError::InvalidPattern {
        name: name.to_string(),
        source,
    })
}
