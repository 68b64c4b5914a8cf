use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// True if `id` is a UUID in the 8-4-4-4-12 hyphenated form, any case.
///
/// Version and variant nibbles are not checked. Braced, URN and
/// un-hyphenated spellings are rejected.
pub fn is_project_id(id: &str) -> bool {
    id.len() == 36
        && id.bytes().enumerate().all(|(i, b)| {
            if HYPHENS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

/// Project identifier taken verbatim from the `{id}` path segment.
///
/// Rejects with 400 "Invalid project ID" before the handler runs. The text is
/// kept as sent so lookups match it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(pub String);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        if !is_project_id(&raw) {
            return Err(invalid());
        }

        Ok(ProjectId(raw))
    }
}

fn invalid() -> AppError {
    AppError::BadRequest("Invalid project ID".to_string())
}
