use actix_files::NamedFile;
use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    mime, web, HttpRequest, HttpResponse, Responder,
};
use std::io::ErrorKind;
use tracing::{error, warn};

use crate::{
    api::schemas::ErrorResponse,
    modules::download::application::{
        domain::entities::ResumeFile, ports::incoming::use_cases::DownloadResumeError,
    },
    shared::api::ApiResponse,
    AppState,
};

fn map_download_resume_error(err: DownloadResumeError) -> HttpResponse {
    match err {
        DownloadResumeError::NotFound => {
            warn!("Resume requested but no file is configured on disk");
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume file not found")
        }

        DownloadResumeError::ReadFailed(msg) => {
            error!(error = %msg, "Failed to read resume");
            ApiResponse::internal_error()
        }
    }
}

/// Download the résumé as an attachment
#[utoipa::path(
    get,
    path = "/api/download/resume",
    tag = "download",
    responses(
        (
            status = 200,
            description = "Résumé file",
            content_type = "application/pdf",
            body = Vec<u8>,
            headers(("Content-Disposition" = String, description = "attachment; filename=\"resume.pdf\""))
        ),
        (status = 404, description = "No résumé on the server", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/download/resume")]
pub async fn download_resume_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.download_resume_use_case.execute().await {
        Ok(file) => stream_attachment(&req, file).await,
        Err(e) => map_download_resume_error(e),
    }
}

/// Streams the file with Range and ETag support, forcing an attachment.
async fn stream_attachment(req: &HttpRequest, file: ResumeFile) -> HttpResponse {
    let named = match NamedFile::open_async(&file.path).await {
        Ok(named) => named,
        // Removed between lookup and open.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return map_download_resume_error(DownloadResumeError::NotFound);
        }
        Err(e) => {
            return map_download_resume_error(DownloadResumeError::ReadFailed(format!(
                "{}: {}",
                file.path.display(),
                e
            )));
        }
    };

    let content_type = file
        .content_type
        .parse::<mime::Mime>()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM);

    named
        .set_content_type(content_type)
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.file_name)],
        })
        .into_response(req)
}
