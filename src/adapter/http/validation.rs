use std::collections::HashMap;

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use crate::adapter::http::schema::batch::{COUNT_FIELD, validate_batch_count};
use crate::application::app_error::AppError;

/// Validated batch size taken from a form post or a JSON body.
#[derive(Debug, Clone, Copy)]
pub struct BatchForm {
    pub count: u32,
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn raw_json_count(body: &Value) -> Option<String> {
    match body.get(COUNT_FIELD)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl<S> FromRequest<S> for BatchForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw = if is_json(&req) {
            let Json(body) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidBody(e.body_text()))?;
            raw_json_count(&body)
        } else {
            let Form(mut fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidBody(e.body_text()))?;
            fields.remove(COUNT_FIELD)
        };

        let count = validate_batch_count(raw.as_deref())?;
        Ok(BatchForm { count })
    }
}
