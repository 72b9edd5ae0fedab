// Environment variable overrides

use crate::{Bounds, ConfigError, Limits, PatternSource, Result};
use std::collections::HashMap;
use std::env;

pub const DEFAULT_PREFIX: &str = "FIELDCHECK";

/// Reads `<PREFIX>_*` variables and applies them over loaded constants.
///
/// Recognized keys (after the prefix is stripped and lowercased):
/// `pattern_<name>`, `room_max_count`, `room_max_capacity` and
/// `<role>_min` / `<role>_max` for `super_admin`, `admin`, `sales`,
/// `researcher`.
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Collect prefixed variables, keyed without the prefix
    pub fn load(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        let head = format!("{}_", self.prefix);

        for (key, value) in env::vars() {
            if let Some(rest) = key.strip_prefix(&head) {
                vars.insert(rest.to_lowercase(), value);
            }
        }

        vars
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = format!("{}_{}", self.prefix, key.to_uppercase());
        env::var(&full_key).map_err(ConfigError::EnvError)
    }

    /// Apply the current environment over `patterns` and `limits`
    pub fn apply(&self, patterns: &mut PatternSource, limits: &mut Limits) -> Result<()> {
        apply_vars(&self.load(), patterns, limits)
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Apply already-collected overrides. Unknown keys are ignored.
pub fn apply_vars(
    vars: &HashMap<String, String>,
    patterns: &mut PatternSource,
    limits: &mut Limits,
) -> Result<()> {
    for (key, value) in vars {
        if let Some(name) = key.strip_prefix("pattern_") {
            if patterns.set(name, value.clone()) {
                tracing::debug!(pattern = %name, "Pattern overridden from environment");
            }
            continue;
        }

        let users = &mut limits.cooperation_users;
        match key.as_str() {
            "room_max_count" => limits.room.max_count = parse_limit(key, value)?,
            "room_max_capacity" => limits.room.max_capacity = parse_limit(key, value)?,
            _ => {
                let Some((role, side)) = key.rsplit_once('_') else {
                    continue;
                };
                let bounds: &mut Bounds = match role {
                    "super_admin" => &mut users.super_admin,
                    "admin" => &mut users.admin,
                    "sales" => &mut users.sales,
                    "researcher" => &mut users.researcher,
                    _ => continue,
                };
                match side {
                    "min" => bounds.min = Some(parse_limit(key, value)?),
                    "max" => bounds.max = Some(parse_limit(key, value)?),
                    _ => continue,
                }
            }
        }
        tracing::debug!(key = %key, value = %value, "Limit overridden from environment");
    }

    Ok(())
}

fn parse_limit(key: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLimit(format!("{} = {:?} is not an integer", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_apply_limits() {
        let mut patterns = PatternSource::default();
        let mut limits = Limits::default();

        apply_vars(
            &vars(&[
                ("room_max_count", "12"),
                ("admin_max", " 7 "),
                ("super_admin_min", "2"),
                ("super_admin_max", "3"),
            ]),
            &mut patterns,
            &mut limits,
        )
        .unwrap();

        assert_eq!(limits.room.max_count, 12);
        assert_eq!(limits.cooperation_users.admin.max, Some(7));
        assert_eq!(limits.cooperation_users.super_admin, Bounds::between(2, 3));
    }

    #[test]
    fn test_apply_pattern() {
        let mut patterns = PatternSource::default();
        let mut limits = Limits::default();

        apply_vars(
            &vars(&[("pattern_mobile", r"^\d{8}$")]),
            &mut patterns,
            &mut limits,
        )
        .unwrap();

        assert_eq!(patterns.mobile, r"^\d{8}$");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut patterns = PatternSource::default();
        let mut limits = Limits::default();

        apply_vars(
            &vars(&[("log", "debug"), ("pattern_nope", "x"), ("viewer_max", "3")]),
            &mut patterns,
            &mut limits,
        )
        .unwrap();

        assert_eq!(patterns, PatternSource::default());
        assert_eq!(limits, Limits::default());
    }

    #[test]
    fn test_non_integer_limit() {
        let mut patterns = PatternSource::default();
        let mut limits = Limits::default();

        let result = apply_vars(
            &vars(&[("room_max_capacity", "lots")]),
            &mut patterns,
            &mut limits,
        );
        assert!(matches!(result, Err(ConfigError::InvalidLimit(_))));
    }

    #[test]
    fn test_env_loader_missing_var() {
        let loader = EnvLoader::new("FIELDCHECK_TEST");
        assert!(loader.load_var("MISSING_VAR_67890").is_err());
    }
}
