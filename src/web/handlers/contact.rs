use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use launchsite::models::ContactSubmission;
use launchsite::ui::contact::{is_valid_email, SubmissionPayload, MIN_MESSAGE_LEN, MIN_NAME_LEN};

use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmissionAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Server-side re-validation; the client-side form checks the same rules
/// but cannot be trusted to have run.
fn validation_error(payload: &SubmissionPayload) -> Option<&'static str> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() || payload.message.trim().is_empty() {
        return Some("Missing required fields");
    }
    if payload.name.chars().count() < MIN_NAME_LEN {
        return Some("Name must contain at least 2 characters");
    }
    if !is_valid_email(&payload.email) {
        return Some("Please enter a valid email address");
    }
    if payload.message.chars().count() < MIN_MESSAGE_LEN {
        return Some("Message must contain at least 10 characters");
    }
    None
}

#[post("/api/contact")]
pub async fn submit_contact(
    state: web::Data<AppState>,
    payload: web::Json<SubmissionPayload>,
) -> impl Responder {
    let payload = payload.into_inner();

    if let Some(message) = validation_error(&payload) {
        return HttpResponse::BadRequest().json(SubmissionAck {
            success: false,
            message: Some(message.to_string()),
        });
    }

    let submission = ContactSubmission {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        message: payload.message,
        service: payload.service,
        submitted_at: Utc::now(),
    };

    match state.cms.create_submission(&submission).await {
        Ok(()) => HttpResponse::Ok().json(SubmissionAck {
            success: true,
            message: None,
        }),
        Err(e) => {
            log::error!("Error handling contact form submission: {e}");
            HttpResponse::InternalServerError().json(SubmissionAck {
                success: false,
                message: Some("An error occurred while submitting the form".to_string()),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_contact);
}
