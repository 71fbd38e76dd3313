use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid skill row {id}: {reason}")]
    InvalidRow { id: String, reason: String },
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillQueryError>;
}
