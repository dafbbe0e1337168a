use actix_web::{delete, get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::{
    create_record, delete_record, list_records, update_record,
};
use crate::modules::content::domain::ListRequest;
use crate::modules::testimonials::domain::{Testimonial, TestimonialUpdate};
use crate::AppState;

/// Testimonials, newest first
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "public",
    responses(
        (status = 200, description = "Testimonial list", body = inline(SuccessResponse<Vec<Testimonial>>)),
    )
)]
#[get("/api/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.testimonials, ListRequest::public::<Testimonial>()).await
}

#[get("/api/admin/testimonials")]
pub async fn list_admin_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.testimonials, ListRequest::admin::<Testimonial>()).await
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials",
    tag = "admin",
    request_body = Testimonial,
    responses(
        (status = 201, description = "Testimonial created", body = inline(SuccessResponse<Testimonial>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
#[post("/api/admin/testimonials")]
pub async fn create_testimonial_handler(
    req: web::Json<Testimonial>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_record(&data.testimonials, req.into_inner()).await
}

#[put("/api/admin/testimonials/{id}")]
pub async fn update_testimonial_handler(
    path: web::Path<String>,
    req: web::Json<TestimonialUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_record(&data.testimonials, &path.into_inner(), req.into_inner()).await
}

#[delete("/api/admin/testimonials/{id}")]
pub async fn delete_testimonial_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_record(&data.testimonials, &path.into_inner()).await
}
