use async_trait::async_trait;

use crate::modules::download::application::{
    domain::entities::ResumeFile,
    ports::{
        incoming::use_cases::{DownloadResumeError, DownloadResumeUseCase},
        outgoing::{ResumeStore, ResumeStoreError},
    },
};

#[derive(Debug, Clone)]
pub struct DownloadResumeService<S>
where
    S: ResumeStore + Send + Sync,
{
    store: S,
}

impl<S> DownloadResumeService<S>
where
    S: ResumeStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> DownloadResumeUseCase for DownloadResumeService<S>
where
    S: ResumeStore + Send + Sync,
{
    async fn execute(&self) -> Result<ResumeFile, DownloadResumeError> {
        self.store.load_resume().await.map_err(|e| match e {
            ResumeStoreError::NotFound(_) => DownloadResumeError::NotFound,
            ResumeStoreError::Io(msg) => DownloadResumeError::ReadFailed(msg),
        })
    }
}
