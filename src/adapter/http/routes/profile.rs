use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::batch::{BatchErrorResponse, BatchRequest, BatchSuccessResponse};
use crate::adapter::http::schema::pagination::PaginationQuery;
use crate::adapter::http::schema::profile::{ProfileListResponse, ProfileResponse};
use crate::adapter::http::validation::BatchForm;
use crate::application::app_error::AppResult;
use crate::application::dto::profile::{GetProfileDTO, GetProfileListDTO, ImportProfilesDTO};
use crate::application::interactors::profile::{
    GetProfileInteractor, GetProfileListInteractor, GetRandomProfileInteractor, ImportProfilesInteractor,
};
use crate::infra::constants::PROFILES_PER_PAGE;

#[utoipa::path(
    get,
    path = "/",
    tag = "Profiles",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of profiles, newest first", body = ProfileListResponse),
        (
            status = 404,
            description = "Page is not a number or is out of range",
            body = ErrorResponse,
            example = json!({ "error": "Invalid page" })
        )
    )
)]
pub async fn list_profiles(
    interactor: GetProfileListInteractor,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let dto = GetProfileListDTO {
        page: query.page,
        per_page: PROFILES_PER_PAGE,
    };
    let result = interactor.execute(dto).await?;

    Ok((StatusCode::OK, Json(ProfileListResponse::from(result))))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Profiles",
    request_body(content = BatchRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (
            status = 200,
            description = "Profiles fetched and stored; `saved` may be lower than `count`",
            body = BatchSuccessResponse,
            example = json!({ "success": true, "saved": 10 })
        ),
        (
            status = 400,
            description = "`count` is missing, not a whole number, or outside 1..=5000",
            body = BatchErrorResponse,
            example = json!({
                "success": false,
                "errors": { "count": [{ "code": "range", "message": "Ensure this value is between 1 and 5000.", "params": { "min": 1.0, "max": 5000.0, "value": 0 } }] },
                "message": "Invalid input"
            })
        )
    )
)]
pub async fn import_profiles(
    interactor: ImportProfilesInteractor,
    form: BatchForm,
) -> AppResult<impl IntoResponse> {
    let result = interactor
        .execute(ImportProfilesDTO { count: form.count })
        .await?;

    Ok((
        StatusCode::OK,
        Json(BatchSuccessResponse {
            success: true,
            saved: result.saved,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/{profile_id}",
    tag = "Profiles",
    params(("profile_id" = i64, Path, description = "Profile identifier")),
    responses(
        (status = 200, description = "Profile detail", body = ProfileResponse),
        (
            status = 404,
            description = "No profile with this id",
            body = ErrorResponse,
            example = json!({ "error": "Profile not found" })
        )
    )
)]
pub async fn get_profile(
    interactor: GetProfileInteractor,
    Path(profile_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(GetProfileDTO { profile_id }).await?;

    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/random",
    tag = "Profiles",
    responses(
        (status = 200, description = "A random stored profile; an empty store is seeded with one first", body = ProfileResponse),
        (
            status = 404,
            description = "Store is empty and the upstream API returned nothing usable",
            body = ErrorResponse,
            example = json!({ "error": "Profile not found" })
        )
    )
)]
pub async fn get_random_profile(interactor: GetRandomProfileInteractor) -> AppResult<impl IntoResponse> {
    let result = interactor.execute().await?;

    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}
