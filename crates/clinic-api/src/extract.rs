use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

enum BodyKind {
    Json,
    Form,
}

/// Form submission body, accepted either as `application/json` (what the
/// site script sends) or as `application/x-www-form-urlencoded` (a plain
/// HTML form post). Schema errors are rejected here, before any handler runs.
pub struct Submission<T>(pub T);

impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(&req).ok_or(ApiError::UnsupportedMediaType)?;

        match kind {
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidPayload(e.body_text()))?;
                Ok(Submission(value))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidPayload(e.body_text()))?;
                Ok(Submission(value))
            }
        }
    }
}

fn body_kind(req: &Request) -> Option<BodyKind> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())?
        .to_ascii_lowercase();

    let essence = content_type.split(';').next().unwrap_or("").trim();
    match essence {
        "application/json" => Some(BodyKind::Json),
        "application/x-www-form-urlencoded" => Some(BodyKind::Form),
        // Structured-syntax JSON types, e.g. application/ld+json
        _ if essence.starts_with("application/") && essence.ends_with("+json") => {
            Some(BodyKind::Json)
        }
        _ => None,
    }
}
