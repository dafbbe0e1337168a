use actix_web::{delete, get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::{
    create_record, delete_record, list_records, update_record,
};
use crate::modules::content::domain::ListRequest;
use crate::modules::education::domain::{Education, EducationUpdate};
use crate::AppState;

/// Education history, most recent start date first
#[utoipa::path(
    get,
    path = "/api/education",
    tag = "public",
    responses(
        (status = 200, description = "Education list", body = inline(SuccessResponse<Vec<Education>>)),
    )
)]
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.education, ListRequest::public::<Education>()).await
}

#[get("/api/admin/education")]
pub async fn list_admin_education_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.education, ListRequest::admin::<Education>()).await
}

#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "admin",
    request_body = Education,
    responses(
        (status = 201, description = "Education created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
#[post("/api/admin/education")]
pub async fn create_education_handler(
    req: web::Json<Education>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_record(&data.education, req.into_inner()).await
}

#[put("/api/admin/education/{id}")]
pub async fn update_education_handler(
    path: web::Path<String>,
    req: web::Json<EducationUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_record(&data.education, &path.into_inner(), req.into_inner()).await
}

#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_record(&data.education, &path.into_inner()).await
}
