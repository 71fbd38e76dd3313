use async_trait::async_trait;

use crate::modules::about::application::{
    domain::entities::About,
    ports::{
        incoming::use_cases::{GetAboutError, GetAboutUseCase},
        outgoing::AboutQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAboutUseCase for GetAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(&self) -> Result<About, GetAboutError> {
        self.query
            .find_about()
            .await
            .map_err(|e| GetAboutError::QueryFailed(e.to_string()))?
            .ok_or(GetAboutError::NotFound)
    }
}
