use actix_web::{get, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::content_error_response;
use crate::modules::settings::domain::{Settings, SettingsUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current settings; the defaults are stored on first read
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = "admin",
    responses(
        (status = 200, description = "Settings", body = inline(SuccessResponse<Settings>)),
    )
)]
#[get("/api/admin/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<Settings>(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = "admin",
    request_body = SettingsUpdate,
    responses(
        (status = 200, description = "Settings updated", body = inline(SuccessResponse<Settings>)),
        (status = 404, description = "No settings stored yet", body = ErrorResponse),
    )
)]
#[put("/api/admin/settings")]
pub async fn update_settings_handler(
    req: web::Json<SettingsUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.settings.update.execute(req.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<Settings>(e),
    }
}
