use actix_web::{get, put, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::content_error_response;
use crate::modules::personal::domain::{PersonalInfo, PersonalInfoUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn current_personal(data: &AppState) -> HttpResponse {
    match data.personal.get.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<PersonalInfo>(e),
    }
}

/// Get the owner profile
#[utoipa::path(
    get,
    path = "/api/personal",
    tag = "public",
    responses(
        (status = 200, description = "Profile found", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 404, description = "No profile stored yet", body = ErrorResponse),
    )
)]
#[get("/api/personal")]
pub async fn get_personal_handler(data: web::Data<AppState>) -> impl Responder {
    current_personal(&data).await
}

#[get("/api/admin/personal")]
pub async fn get_admin_personal_handler(data: web::Data<AppState>) -> impl Responder {
    current_personal(&data).await
}

/// Update the owner profile (filtered merge)
#[utoipa::path(
    put,
    path = "/api/admin/personal",
    tag = "admin",
    request_body = PersonalInfoUpdate,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No profile stored yet", body = ErrorResponse),
    )
)]
#[put("/api/admin/personal")]
pub async fn update_personal_handler(
    req: web::Json<PersonalInfoUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.personal.update.execute(req.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<PersonalInfo>(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::personal::domain::defaults::default_personal_info;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::backdated;
    use crate::tests::support::memory_store::MemoryStore;

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_store($store).build())
                    .app_data(custom_json_config())
                    .service(get_personal_handler)
                    .service(get_admin_personal_handler)
                    .service(update_personal_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn absent_profile_is_not_found() {
        let app = app!(MemoryStore::new());

        let req = test::TestRequest::get().uri("/api/personal").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PERSONAL_INFO_NOT_FOUND");
    }

    #[actix_web::test]
    async fn stored_profile_is_returned_with_mirrored_id() {
        let store = MemoryStore::new();
        let stored = store.insert_stored(backdated(default_personal_info(), 10));
        let app = app!(store);

        let req = test::TestRequest::get().uri("/api/personal").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Aftab Pathan");
        assert_eq!(body["data"]["status"], "available");
        assert_eq!(body["data"]["_id"], stored.id.to_hex());
        assert_eq!(body["data"]["id"], stored.id.to_hex());
    }

    #[actix_web::test]
    async fn update_before_any_profile_exists_is_not_found() {
        let store = MemoryStore::new();
        let app = app!(store.clone());

        let req = test::TestRequest::put()
            .uri("/api/admin/personal")
            .set_json(json!({ "title": "Engineer" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.count_in("personal_info"), 0);
    }

    #[actix_web::test]
    async fn update_merges_only_supplied_fields() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(default_personal_info(), 10));
        let app = app!(store);

        let req = test::TestRequest::put()
            .uri("/api/admin/personal")
            .set_json(json!({ "status": "busy", "github": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "busy");
        assert_eq!(body["data"]["github"], "https://github.com/Aftab0khan021");
        assert_eq!(body["data"]["title"], "Aspiring Software Engineer");
    }

    #[actix_web::test]
    async fn unknown_status_is_a_validation_error() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(default_personal_info(), 10));
        let app = app!(store);

        let req = test::TestRequest::put()
            .uri("/api/admin/personal")
            .set_json(json!({ "status": "asleep" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn admin_read_matches_public_read() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(default_personal_info(), 10));
        let app = app!(store);

        let req = test::TestRequest::get().uri("/api/admin/personal").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
