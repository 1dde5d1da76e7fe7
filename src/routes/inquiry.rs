use axum::{extract::State, http::HeaderMap, Json};

use crate::dto::inquiry_dto::{InquiryCreatedResponse, InquiryListResponse, NewInquiry};
use crate::middleware::auth::require_admin;
use crate::AppState;

#[axum::debug_handler]
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> crate::error::Result<Json<InquiryCreatedResponse>> {
    // Field-by-field parse so type mismatches are reported per field in
    // the validation envelope, not as one opaque serde message.
    let payload = NewInquiry::from_payload(&body).map_err(crate::error::Error::Validation)?;

    let inquiry = state
        .inquiry_service
        .submit(&state.email_service, payload)
        .await?;

    Ok(Json(InquiryCreatedResponse {
        success: true,
        inquiry,
    }))
}

#[axum::debug_handler]
pub async fn list_inquiries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> crate::error::Result<Json<InquiryListResponse>> {
    require_admin(&headers)?;

    let inquiries = state.inquiry_service.list_inquiries().await?;

    Ok(Json(InquiryListResponse {
        success: true,
        inquiries,
    }))
}
