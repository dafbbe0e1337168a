use actix_web::{delete, get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::{
    create_record, delete_record, get_record, list_records, update_record,
};
use crate::modules::content::domain::ListRequest;
use crate::modules::projects::domain::{featured_projects, Project, ProjectUpdate};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Public
// ──────────────────────────────────────────────────────────
//

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "public",
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.projects, ListRequest::public::<Project>()).await
}

/// Up to six completed projects. Registered ahead of `/api/projects/{id}`.
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "public",
    responses(
        (status = 200, description = "Featured projects", body = inline(SuccessResponse<Vec<Project>>)),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.projects, featured_projects()).await
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "public",
    params(("id" = String, Path, description = "Project id (24 hex chars)")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    get_record(&data.projects, &path.into_inner()).await
}

//
// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────
//

#[get("/api/admin/projects")]
pub async fn list_admin_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.projects, ListRequest::admin::<Project>()).await
}

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "admin",
    request_body = Project,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    req: web::Json<Project>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_record(&data.projects, req.into_inner()).await
}

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<String>,
    req: web::Json<ProjectUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_record(&data.projects, &path.into_inner(), req.into_inner()).await
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_record(&data.projects, &path.into_inner()).await
}
