use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::about::application::{
        domain::entities::About, ports::incoming::use_cases::GetAboutError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get the portfolio owner's profile
///
/// Returns the single about document: bio, education, courses and interests.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    responses(
        (status = 200, description = "About information", body = inline(SuccessResponse<About>)),
        (
            status = 404,
            description = "Nothing has been seeded yet",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ABOUT_NOT_FOUND",
                    "message": "About information not found"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_about_use_case.execute().await {
        Ok(about) => ApiResponse::success(about),
        Err(err) => map_get_about_error(err),
    }
}

fn map_get_about_error(err: GetAboutError) -> HttpResponse {
    match err {
        GetAboutError::NotFound => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About information not found")
        }
        GetAboutError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to fetch about information");
            ApiResponse::internal_error()
        }
    }
}
