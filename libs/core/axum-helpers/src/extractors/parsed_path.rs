//! Single path parameter extractor parsed through `FromStr`.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::fmt::Display;
use std::str::FromStr;

/// Extractor for a single path parameter of any `FromStr` type.
///
/// Unparsable values are rejected with `422 INVALID_PATH_PARAMETER` before the
/// handler runs.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::ParsedPath;
///
/// async fn get_order(ParsedPath(id): ParsedPath<u64>) -> String {
///     format!("Order {}", id)
/// }
///
/// let app = Router::new().route("/orders/{id}", get(get_order));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedPath<T>
where
    T: FromStr + Send,
    T::Err: Display,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidPathParameter(e.body_text()))?;

        raw.parse::<T>()
            .map(ParsedPath)
            .map_err(|e| AppError::InvalidPathParameter(format!("'{}': {}", raw, e)))
    }
}
