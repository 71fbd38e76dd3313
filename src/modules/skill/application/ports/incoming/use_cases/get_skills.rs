use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};

/// The flat list, the per-category buckets and the total.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillsOverview {
    pub skills: Vec<Skill>,
    #[schema(value_type = Object)]
    pub grouped: BTreeMap<SkillCategory, Vec<Skill>>,
    pub count: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Failed to fetch skills: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SkillsOverview, GetSkillsError>;
}
