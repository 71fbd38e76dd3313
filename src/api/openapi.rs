use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::health::{HealthStatus, ReadinessStatus};
use crate::modules::about::application::domain::entities::{About, Course, Education};
use crate::modules::contact::{
    adapter::incoming::web::routes::ContactRequest, application::domain::entities::Contact,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::{
    domain::entities::{Skill, SkillCategory},
    ports::incoming::use_cases::SkillsOverview,
};
use crate::shared::api::FieldError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public API behind the personal portfolio site",
    ),
    paths(
        // About
        crate::modules::about::adapter::incoming::web::routes::get_about_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,

        // Skills
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,

        // Download
        crate::modules::download::adapter::incoming::web::routes::download_resume_handler,

        // Health
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Records
            About,
            Education,
            Course,
            Project,
            Skill,
            SkillCategory,
            SkillsOverview,
            Contact,
            ContactRequest,

            HealthStatus,
            ReadinessStatus
        )
    ),
    tags(
        (name = "about", description = "Profile, education and courses"),
        (name = "projects", description = "Portfolio projects"),
        (name = "skills", description = "Skills grouped by category"),
        (name = "contact", description = "Contact form"),
        (name = "download", description = "Résumé download"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
