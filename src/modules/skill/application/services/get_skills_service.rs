use async_trait::async_trait;

use crate::modules::skill::application::{
    domain::grouping::{group_by_category, sort_for_display},
    ports::{
        incoming::use_cases::{GetSkillsError, GetSkillsUseCase, SkillsOverview},
        outgoing::SkillQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<SkillsOverview, GetSkillsError> {
        let mut skills = self
            .query
            .list_skills()
            .await
            .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))?;

        sort_for_display(&mut skills);
        let grouped = group_by_category(&skills);

        Ok(SkillsOverview {
            count: skills.len(),
            grouped,
            skills,
        })
    }
}
