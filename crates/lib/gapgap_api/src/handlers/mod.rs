//! Request handlers.

pub mod auth;
pub mod chat;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Parse a JSON request body. A blank body reads as `{}`.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> AppResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRequest;

    #[test]
    fn blank_body_is_default() {
        let req: ChatRequest = parse_body(&Bytes::from_static(b"  \n")).unwrap();
        assert!(req.user_id.is_none());
    }

    #[test]
    fn malformed_body_is_validation_error() {
        let err = parse_body::<ChatRequest>(&Bytes::from_static(b"{userId:")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
