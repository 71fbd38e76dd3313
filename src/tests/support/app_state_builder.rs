use crate::modules::about::application::ports::incoming::use_cases::GetAboutUseCase;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::download::application::ports::incoming::use_cases::DownloadResumeUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectByIdUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_about: Arc<dyn GetAboutUseCase + Send + Sync>,
    project: ProjectUseCases,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    download_resume: Arc<dyn DownloadResumeUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_about: Arc::new(StubGetAboutUseCase::not_found()),
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase::success(vec![])),
                get_single: Arc::new(StubGetProjectByIdUseCase::not_found()),
            },
            get_skills: Arc::new(StubGetSkillsUseCase::empty()),
            submit_contact: Arc::new(StubSubmitContactUseCase::validating()),
            download_resume: Arc::new(StubDownloadResumeUseCase::not_found()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + Send + Sync + 'static) -> Self {
        self.get_about = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_project_by_id(
        mut self,
        uc: impl GetProjectByIdUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_download_resume(
        mut self,
        uc: impl DownloadResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.download_resume = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_about_use_case: self.get_about,
            project: self.project,
            get_skills_use_case: self.get_skills,
            submit_contact_use_case: self.submit_contact,
            download_resume_use_case: self.download_resume,
        })
    }
}
