use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::modules::download::application::{
    domain::entities::{ResumeFile, PDF_CONTENT_TYPE},
    ports::outgoing::{ResumeStore, ResumeStoreError},
};

/// Looks the résumé up on the local filesystem on every request, so a
/// replaced file is picked up without a restart. The bytes are streamed by
/// the web adapter.
#[derive(Debug, Clone)]
pub struct ResumeStoreLocal {
    path: PathBuf,
    download_name: String,
}

impl ResumeStoreLocal {
    pub fn new(path: impl Into<PathBuf>, download_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            download_name: download_name.into(),
        }
    }
}

#[async_trait]
impl ResumeStore for ResumeStoreLocal {
    async fn load_resume(&self) -> Result<ResumeFile, ResumeStoreError> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ResumeStoreError::NotFound(self.path.display().to_string()),
                _ => ResumeStoreError::Io(format!("{}: {}", self.path.display(), e)),
            })?;

        if !metadata.is_file() {
            return Err(ResumeStoreError::Io(format!(
                "{}: not a regular file",
                self.path.display()
            )));
        }

        Ok(ResumeFile {
            path: self.path.clone(),
            file_name: self.download_name.clone(),
            content_type: PDF_CONTENT_TYPE,
        })
    }
}
