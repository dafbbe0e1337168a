use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::domain::{BlogPost, BlogPostCreate, BlogPostUpdate};
use crate::modules::content::adapter::incoming::web::content_error_response;
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::domain::ListRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct BlogListQuery {
    /// 1-100, default 50.
    pub limit: Option<i64>,
}

fn respond<D: serde::Serialize>(result: Result<D, ContentError>) -> HttpResponse {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(e) => content_error_response::<BlogPost>(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Public
// ──────────────────────────────────────────────────────────
//

/// Published posts, newest publication first
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "public",
    params(BlogListQuery),
    responses(
        (status = 200, description = "Published posts", body = inline(SuccessResponse<Vec<BlogPost>>)),
        (status = 400, description = "Limit outside 1-100", body = ErrorResponse),
    )
)]
#[get("/api/blog")]
pub async fn get_blog_posts_handler(
    query: web::Query<BlogListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.blog.published.execute(query.limit).await)
}

/// Featured published posts. Registered ahead of `/api/blog/{slug}`.
#[utoipa::path(
    get,
    path = "/api/blog/featured",
    tag = "public",
    responses(
        (status = 200, description = "Featured posts", body = inline(SuccessResponse<Vec<BlogPost>>)),
    )
)]
#[get("/api/blog/featured")]
pub async fn get_featured_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.blog.featured.execute().await)
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "public",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post found", body = inline(SuccessResponse<BlogPost>)),
        (status = 404, description = "No published post with that slug", body = ErrorResponse),
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.blog.by_slug.execute(&path.into_inner()).await)
}

//
// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────
//

/// Every post regardless of status, newest first
#[get("/api/admin/blog")]
pub async fn list_admin_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.blog.list.execute(ListRequest::admin::<BlogPost>()).await)
}

#[utoipa::path(
    post,
    path = "/api/admin/blog",
    tag = "admin",
    request_body = BlogPostCreate,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<BlogPost>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse),
    )
)]
#[post("/api/admin/blog")]
pub async fn create_blog_post_handler(
    req: web::Json<BlogPostCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.create.execute(req.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => content_error_response::<BlogPost>(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/blog/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Post id")),
    request_body = BlogPostUpdate,
    responses(
        (status = 200, description = "Post updated", body = inline(SuccessResponse<BlogPost>)),
        (status = 400, description = "Malformed id or invalid input", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse),
    )
)]
#[put("/api/admin/blog/{id}")]
pub async fn update_blog_post_handler(
    path: web::Path<String>,
    req: web::Json<BlogPostUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.blog.update.execute(&path.into_inner(), req.into_inner()).await)
}

#[delete("/api/admin/blog/{id}")]
pub async fn delete_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.delete.execute(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response::<BlogPost>(e),
    }
}
