use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::contact::application::{
        domain::entities::Contact,
        ports::incoming::use_cases::{SubmitContactError, SubmitContactInput},
    },
    shared::api::{ApiResponse, FieldError},
    AppState,
};

/// Contact form body. Absent and `null` fields are read as empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,

    #[schema(example = "ada@example.com")]
    pub email: Option<String>,

    #[schema(example = "Collaboration")]
    pub subject: Option<String>,

    #[schema(example = "I enjoyed your projects and would like to talk.")]
    pub message: Option<String>,
}

impl From<ContactRequest> for SubmitContactInput {
    fn from(req: ContactRequest) -> Self {
        SubmitContactInput {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            subject: req.subject.unwrap_or_default(),
            message: req.message.unwrap_or_default(),
        }
    }
}

fn map_submit_contact_error(err: SubmitContactError) -> HttpResponse {
    match err {
        SubmitContactError::Invalid(fields) => {
            let details: Vec<FieldError> = fields
                .iter()
                .map(|f| FieldError::new(f.field, f.message))
                .collect();

            warn!(
                fields = ?fields.iter().map(|f| f.field).collect::<Vec<_>>(),
                "Rejected contact submission"
            );
            ApiResponse::validation_failed(details)
        }

        SubmitContactError::RepositoryFailed(msg) => {
            error!(error = %msg, "Failed to store contact submission");
            ApiResponse::internal_error()
        }
    }
}

/// Submit the contact form
///
/// Every field is trimmed before validation. All failing fields are listed in
/// `error.details`.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<Contact>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Please provide all required fields",
                    "details": [
                        { "field": "email", "message": "valid email is required" }
                    ]
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.submit_contact_use_case.execute(req.into_inner().into()).await {
        Ok(contact) => {
            info!(contact_id = %contact.id, "Contact message received");
            ApiResponse::created(contact)
        }
        Err(e) => map_submit_contact_error(e),
    }
}
