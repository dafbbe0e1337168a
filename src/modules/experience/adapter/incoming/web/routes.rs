use actix_web::{delete, get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::{
    create_record, delete_record, list_records, update_record,
};
use crate::modules::content::domain::ListRequest;
use crate::modules::experience::domain::{Experience, ExperienceUpdate};
use crate::AppState;

/// Work history, most recent start date first
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "public",
    responses(
        (status = 200, description = "Experience entries", body = inline(SuccessResponse<Vec<Experience>>)),
    )
)]
#[get("/api/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.experiences, ListRequest::public::<Experience>()).await
}

#[get("/api/admin/experience")]
pub async fn list_admin_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.experiences, ListRequest::admin::<Experience>()).await
}

#[utoipa::path(
    post,
    path = "/api/admin/experience",
    tag = "admin",
    request_body = Experience,
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
#[post("/api/admin/experience")]
pub async fn create_experience_handler(
    req: web::Json<Experience>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_record(&data.experiences, req.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/api/admin/experience/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Experience id")),
    request_body = ExperienceUpdate,
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Malformed id or invalid input", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/experience/{id}")]
pub async fn update_experience_handler(
    path: web::Path<String>,
    req: web::Json<ExperienceUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_record(&data.experiences, &path.into_inner(), req.into_inner()).await
}

#[delete("/api/admin/experience/{id}")]
pub async fn delete_experience_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_record(&data.experiences, &path.into_inner()).await
}
