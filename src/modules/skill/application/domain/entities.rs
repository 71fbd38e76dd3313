use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Skill buckets shown on the skills page.
///
/// Variant order is the display order of the buckets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Database,
    Tools,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::SoftSkills => "soft-skills",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownSkillCategory(s.to_string()))
    }
}

/// Proficiency percentage, 0 through 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillLevel(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("skill level must be between 0 and 100, got {0}")]
pub struct SkillLevelOutOfRange(pub i64);

impl SkillLevel {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, SkillLevelOutOfRange> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SkillLevelOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        SkillLevel::new(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    #[schema(value_type = u8, minimum = 0, maximum = 100)]
    pub level: SkillLevel,
    pub icon: String,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_round_trip_through_from_str() {
        for category in SkillCategory::ALL {
            assert_eq!(category.as_str().parse::<SkillCategory>(), Ok(category));
        }
    }

    #[test]
    fn soft_skills_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_value(SkillCategory::SoftSkills).unwrap();
        assert_eq!(json, "soft-skills");

        let parsed: SkillCategory = serde_json::from_str("\"soft-skills\"").unwrap();
        assert_eq!(parsed, SkillCategory::SoftSkills);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_eq!(
            "Language".parse::<SkillCategory>(),
            Err(UnknownSkillCategory("Language".to_string()))
        );
        assert!(serde_json::from_str::<SkillCategory>("\"security\"").is_err());
    }

    #[test]
    fn default_category_is_frontend() {
        assert_eq!(SkillCategory::default(), SkillCategory::Frontend);
    }

    #[test]
    fn level_bounds_are_inclusive() {
        assert_eq!(SkillLevel::new(0).unwrap().value(), 0);
        assert_eq!(SkillLevel::new(100).unwrap().value(), 100);
        assert_eq!(SkillLevel::new(101), Err(SkillLevelOutOfRange(101)));
        assert_eq!(SkillLevel::new(-1), Err(SkillLevelOutOfRange(-1)));
    }

    #[test]
    fn level_deserialize_validates() {
        assert_eq!(serde_json::from_str::<SkillLevel>("85").unwrap().value(), 85);
        assert!(serde_json::from_str::<SkillLevel>("150").is_err());
    }
}
