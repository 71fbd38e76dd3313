use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::skill::application::ports::incoming::use_cases::{GetSkillsError, SkillsOverview},
    shared::api::ApiResponse,
    AppState,
};

/// List skills, flat and grouped by category
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "Skills with per-category grouping", body = inline(SuccessResponse<SkillsOverview>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_skills_use_case.execute().await {
        Ok(overview) => ApiResponse::success(overview),

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list skills");
            ApiResponse::internal_error()
        }
    }
}
