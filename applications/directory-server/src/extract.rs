//! Request extractors for the user resources

use crate::error::ServerError;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, request::Parts},
    Form, Json,
};
use directory_core::{UserDraft, UserFilter, UserId};

/// User fields taken from a JSON or form-encoded body
///
/// Any other content type (or none) yields an empty draft, so validation
/// reports the missing `name` the same way it would for an empty form.
#[derive(Debug, Clone)]
pub struct UserPayload(pub UserDraft);

#[axum::async_trait]
impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(draft) = Json::<UserDraft>::from_request(req, state)
                .await
                .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
            Ok(Self(draft))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(draft) = Form::<UserDraft>::from_request(req, state)
                .await
                .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
            Ok(Self(draft))
        } else {
            Ok(Self(UserDraft::default()))
        }
    }
}

/// List filters from the query string
///
/// A repeated key keeps its first value; unknown keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct UserQuery(pub UserFilter);

#[axum::async_trait]
impl<S> FromRequestParts<S> for UserQuery
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

        Ok(Self(filter_from_pairs(pairs)))
    }
}

fn filter_from_pairs(pairs: Vec<(String, String)>) -> UserFilter {
    let mut filter = UserFilter::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "name" => &mut filter.name,
            "email" => &mut filter.email,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    filter
}

/// User id from the `:id` path segment
///
/// Only unsigned decimal integers match; anything else is treated as an
/// unknown route and answered with 404.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        parse_user_id(&raw).map(Self).ok_or_else(not_found)
    }
}

fn not_found() -> ServerError {
    ServerError::NotFound("Not found".to_string())
}

fn parse_user_id(raw: &str) -> Option<UserId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
