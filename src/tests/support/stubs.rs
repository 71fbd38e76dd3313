use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::about::application::{
    domain::entities::About,
    ports::incoming::use_cases::{GetAboutError, GetAboutUseCase},
};
use crate::modules::contact::application::{
    domain::entities::{Contact, SubmitContactCommand},
    ports::incoming::use_cases::{SubmitContactError, SubmitContactInput, SubmitContactUseCase},
};
use crate::modules::download::application::{
    domain::entities::{ResumeFile, PDF_CONTENT_TYPE},
    ports::incoming::use_cases::{DownloadResumeError, DownloadResumeUseCase},
};
use crate::modules::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{
        GetProjectByIdError, GetProjectByIdUseCase, GetProjectsError, GetProjectsUseCase,
    },
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase, SkillsOverview,
};

// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetAboutUseCase {
    result: Result<About, GetAboutError>,
}

impl StubGetAboutUseCase {
    pub fn success(about: About) -> Self {
        Self { result: Ok(about) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetAboutError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetAboutError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetAboutUseCase for StubGetAboutUseCase {
    async fn execute(&self) -> Result<About, GetAboutError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    result: Result<Vec<Project>, GetProjectsError>,
}

impl StubGetProjectsUseCase {
    pub fn success(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetProjectsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectByIdUseCase {
    result: Result<Project, GetProjectByIdError>,
}

impl StubGetProjectByIdUseCase {
    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetProjectByIdError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetProjectByIdError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetProjectByIdUseCase for StubGetProjectByIdUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<Project, GetProjectByIdError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetSkillsUseCase {
    result: Result<SkillsOverview, GetSkillsError>,
}

impl StubGetSkillsUseCase {
    pub fn success(overview: SkillsOverview) -> Self {
        Self {
            result: Ok(overview),
        }
    }

    pub fn empty() -> Self {
        Self::success(SkillsOverview {
            skills: vec![],
            grouped: BTreeMap::new(),
            count: 0,
        })
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSkillsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<SkillsOverview, GetSkillsError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────

/// Runs the real field validation, then echoes the submission back as if it
/// had been stored. `failure` skips validation and reports a storage error.
#[derive(Clone, Default)]
pub struct StubSubmitContactUseCase {
    fail_with: Option<String>,
}

impl StubSubmitContactUseCase {
    pub fn validating() -> Self {
        Self { fail_with: None }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.into()),
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, input: SubmitContactInput) -> Result<Contact, SubmitContactError> {
        if let Some(msg) = &self.fail_with {
            return Err(SubmitContactError::RepositoryFailed(msg.clone()));
        }

        let command =
            SubmitContactCommand::new(&input.name, &input.email, &input.subject, &input.message)
                .map_err(|e| SubmitContactError::Invalid(e.0))?;

        Ok(Contact {
            id: Uuid::new_v4(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            subject: command.subject().to_string(),
            message: command.message().to_string(),
            created_at: Utc::now(),
        })
    }
}

// ──────────────────────────────────────────────────────────
// Download
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubDownloadResumeUseCase {
    result: Result<ResumeFile, DownloadResumeError>,
}

impl StubDownloadResumeUseCase {
    pub fn success(path: impl Into<std::path::PathBuf>, file_name: &str) -> Self {
        Self {
            result: Ok(ResumeFile {
                path: path.into(),
                file_name: file_name.to_string(),
                content_type: PDF_CONTENT_TYPE,
            }),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DownloadResumeError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(DownloadResumeError::ReadFailed(msg.into())),
        }
    }
}

#[async_trait]
impl DownloadResumeUseCase for StubDownloadResumeUseCase {
    async fn execute(&self) -> Result<ResumeFile, DownloadResumeError> {
        self.result.clone()
    }
}
