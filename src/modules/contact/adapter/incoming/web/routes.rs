use actix_web::{get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::domain::{
    ContactMessage, ContactMessageCreate, ContactReceipt, MessageStatusUpdate,
};
use crate::modules::content::adapter::incoming::web::content_error_response;
use crate::modules::content::domain::ListRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "public",
    request_body = ContactMessageCreate,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactReceipt>)),
        (status = 400, description = "Blank field or malformed e-mail", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactMessageCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(req.into_inner()).await {
        Ok(receipt) => ApiResponse::created(receipt),
        Err(e) => content_error_response::<ContactMessage>(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "admin",
    responses(
        (status = 200, description = "Messages, newest first", body = inline(SuccessResponse<Vec<ContactMessage>>)),
    )
)]
#[get("/api/admin/messages")]
pub async fn list_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data
        .contact
        .list
        .execute(ListRequest::admin::<ContactMessage>())
        .await
    {
        Ok(records) => ApiResponse::success(records),
        Err(e) => content_error_response::<ContactMessage>(e),
    }
}

#[put("/api/admin/messages/{id}")]
pub async fn update_message_status_handler(
    path: web::Path<String>,
    req: web::Json<MessageStatusUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact
        .update_status
        .execute(&path.into_inner(), req.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<ContactMessage>(e),
    }
}
