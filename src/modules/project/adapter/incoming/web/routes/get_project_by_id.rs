use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::project::application::{
        domain::entities::Project, ports::incoming::use_cases::GetProjectByIdError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get a single project
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project UUID")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Malformed project id", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return ApiResponse::bad_request("INVALID_PROJECT_ID", "Project id must be a UUID");
        }
    };

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),
        Err(err) => map_get_project_error(project_id, err),
    }
}

fn map_get_project_error(project_id: Uuid, err: GetProjectByIdError) -> HttpResponse {
    match err {
        GetProjectByIdError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "No matching project found")
        }
        GetProjectByIdError::QueryFailed(msg) => {
            error!(%project_id, error = %msg, "Failed to fetch project");
            ApiResponse::internal_error()
        }
    }
}
