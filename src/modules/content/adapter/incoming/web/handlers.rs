use actix_web::HttpResponse;

use super::responses::content_error_response;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::domain::{Entity, ListRequest};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Shared handler bodies
// ──────────────────────────────────────────────────────────
// Every collection exposes the same list/get/create/update/delete
// shape; route files only pick the path and the list request.
//

pub async fn list_records<T: Entity>(
    use_cases: &ContentUseCases<T>,
    request: ListRequest,
) -> HttpResponse {
    match use_cases.list.execute(request).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => content_error_response::<T>(e),
    }
}

pub async fn get_record<T: Entity>(use_cases: &ContentUseCases<T>, id: &str) -> HttpResponse {
    match use_cases.get.execute(id).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<T>(e),
    }
}

pub async fn create_record<T: Entity>(use_cases: &ContentUseCases<T>, content: T) -> HttpResponse {
    match use_cases.create.execute(content).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => content_error_response::<T>(e),
    }
}

pub async fn update_record<T: Entity>(
    use_cases: &ContentUseCases<T>,
    id: &str,
    update: T::Update,
) -> HttpResponse {
    match use_cases.update.execute(id, update).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response::<T>(e),
    }
}

pub async fn delete_record<T: Entity>(use_cases: &ContentUseCases<T>, id: &str) -> HttpResponse {
    match use_cases.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response::<T>(e),
    }
}
