use actix_web::{HttpRequest, HttpResponse};

use crate::shared::api::ApiResponse;

/// Catch-all for unmatched routes.
pub async fn not_found_handler(req: HttpRequest) -> HttpResponse {
    let path = req.uri().path().to_string();
    tracing::debug!(path = %path, method = %req.method(), "No route matched");

    ApiResponse::not_found("NOT_FOUND", &format!("Not Found - {}", path))
}
