use axum::{response::Html, Json};
use utoipa::{openapi::OpenApi as OpenApiDoc, OpenApi};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::profile,
    schema::{
        batch::{BatchErrorResponse, BatchFormSchema, BatchRequest, BatchSuccessResponse},
        profile::{ProfileListResponse, ProfileResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Profile importer", description = "Random person profiles fetched from randomuser.me"),
    paths(
        profile::list_profiles,
        profile::import_profiles,
        profile::get_profile,
        profile::get_random_profile
    ),
    components(
        schemas(
            ErrorResponse,
            BatchRequest,
            BatchFormSchema,
            BatchSuccessResponse,
            BatchErrorResponse,
            ProfileResponse,
            ProfileListResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
