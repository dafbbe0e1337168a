use actix_web::{delete, get, post, put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::{
    create_record, delete_record, list_records, update_record,
};
use crate::modules::content::domain::ListRequest;
use crate::modules::certifications::domain::{Certification, CertificationUpdate};
use crate::AppState;

/// Certifications, most recent first
#[utoipa::path(
    get,
    path = "/api/certifications",
    tag = "public",
    responses(
        (status = 200, description = "Certification list", body = inline(SuccessResponse<Vec<Certification>>)),
    )
)]
#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.certifications, ListRequest::public::<Certification>()).await
}

#[get("/api/admin/certifications")]
pub async fn list_admin_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    list_records(&data.certifications, ListRequest::admin::<Certification>()).await
}

#[utoipa::path(
    post,
    path = "/api/admin/certifications",
    tag = "admin",
    request_body = Certification,
    responses(
        (status = 201, description = "Certification created", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
#[post("/api/admin/certifications")]
pub async fn create_certification_handler(
    req: web::Json<Certification>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_record(&data.certifications, req.into_inner()).await
}

#[put("/api/admin/certifications/{id}")]
pub async fn update_certification_handler(
    path: web::Path<String>,
    req: web::Json<CertificationUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_record(&data.certifications, &path.into_inner(), req.into_inner()).await
}

#[delete("/api/admin/certifications/{id}")]
pub async fn delete_certification_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_record(&data.certifications, &path.into_inner()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};

    use crate::modules::certifications::domain::defaults::default_certifications;
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
                    .service(get_certifications_handler)
                    .service(list_admin_certifications_handler)
                    .service(create_certification_handler)
                    .service(update_certification_handler)
                    .service(delete_certification_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn public_list_puts_most_recent_date_first() {
        let store = MemoryStore::new();
        // Python Foundation (2023) is inserted last but dated earliest.
        for (i, cert) in default_certifications().into_iter().rev().enumerate() {
            store.insert_stored(backdated(cert, 50 - i as i64));
        }
        let app = app!(store);

        let req = test::TestRequest::get().uri("/api/certifications").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3]["title"], "Python Foundation");
    }

    #[actix_web::test]
    async fn create_without_credential_id() {
        let store = MemoryStore::new();
        let app = app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/api/admin/certifications")
            .set_json(json!({
                "title": "Kubernetes Basics",
                "issuer": "CNCF",
                "date": "2025-03-15",
                "description": "Pods and services"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["credential_id"], Value::Null);
        assert_eq!(body["data"]["skills"], json!([]));
    }

    #[actix_web::test]
    async fn delete_unknown_is_not_found() {
        let store = MemoryStore::new();
        store.insert_stored(backdated(default_certifications().remove(0), 5));
        let app = app!(store.clone());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/certifications/{}", ObjectId::new().to_hex()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CERTIFICATION_NOT_FOUND");
        assert_eq!(store.count_in("certifications"), 1);
    }
}
