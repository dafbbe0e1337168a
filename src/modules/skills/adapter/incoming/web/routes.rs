use actix_web::{delete, get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::{
    content_error_response, create_record, delete_record, list_records, update_record,
};
use crate::modules::content::domain::ListRequest;
use crate::modules::skills::domain::{Skill, SkillUpdate, SkillsOverview};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Technical skills grouped by category, plus soft skills
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "public",
    responses(
        (status = 200, description = "Grouped skills", body = inline(SuccessResponse<SkillsOverview>)),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.overview.execute().await {
        Ok(overview) => ApiResponse::success(overview),
        Err(e) => content_error_response::<Skill>(e),
    }
}

#[get("/api/admin/skills")]
pub async fn list_admin_skills_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.skills.content, ListRequest::admin::<Skill>()).await
}

#[utoipa::path(
    post,
    path = "/api/admin/skills",
    tag = "admin",
    request_body = Skill,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Level outside 0-100 or blank name", body = ErrorResponse),
    )
)]
#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    req: web::Json<Skill>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_record(&data.skills.content, req.into_inner()).await
}

#[put("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    path: web::Path<String>,
    req: web::Json<SkillUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_record(&data.skills.content, &path.into_inner(), req.into_inner()).await
}

#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_record(&data.skills.content, &path.into_inner()).await
}
