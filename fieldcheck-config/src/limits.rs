// Numeric limits shared by the range rules

use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive integer bounds. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_most(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    fn check(&self, name: &str) -> Result<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidLimit(format!(
                "{}: min {} is greater than max {}",
                name, min, max
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomLimits {
    pub max_count: i64,
    pub max_capacity: i64,
}

impl Default for RoomLimits {
    fn default() -> Self {
        Self {
            max_count: 50,
            max_capacity: 500,
        }
    }
}

/// Head-count quotas per role on a cooperation account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooperationUserLimits {
    pub super_admin: Bounds,
    pub admin: Bounds,
    pub sales: Bounds,
    pub researcher: Bounds,
}

impl Default for CooperationUserLimits {
    fn default() -> Self {
        Self {
            super_admin: Bounds::between(1, 1),
            admin: Bounds::between(0, 5),
            sales: Bounds::between(0, 50),
            researcher: Bounds::between(0, 200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub room: RoomLimits,
    pub cooperation_users: CooperationUserLimits,
}

impl Limits {
    /// Reject limits no value could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.room.max_count < 1 {
            return Err(ConfigError::InvalidLimit(
                "room.max_count must be at least 1".to_string(),
            ));
        }
        if self.room.max_capacity < 1 {
            return Err(ConfigError::InvalidLimit(
                "room.max_capacity must be at least 1".to_string(),
            ));
        }

        let users = &self.cooperation_users;
        users.super_admin.check("cooperation_users.super_admin")?;
        users.admin.check("cooperation_users.admin")?;
        users.sales.check("cooperation_users.sales")?;
        users.researcher.check("cooperation_users.researcher")?;
        Ok(())
    }
}
