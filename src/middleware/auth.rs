use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// Admin gate: a single process-wide shared secret presented as a bearer
/// token. Returns `false` for a missing header, a non-bearer scheme, or a
/// mismatched credential. Comparison is constant-time.
pub fn authorize(headers: &HeaderMap) -> bool {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return false;
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return false;
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return false;
    };

    let config = crate::config::get_config();
    token
        .as_bytes()
        .ct_eq(config.admin_password.as_bytes())
        .into()
}

pub fn require_admin(headers: &HeaderMap) -> Result<()> {
    // Anything other than a bearer header is a prompt to authenticate;
    // only a presented-but-wrong secret counts as invalid credentials.
    let bearer_present = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer "));
    if !bearer_present {
        return Err(Error::Unauthorized(
            "Admin access required - please provide authorization".to_string(),
        ));
    }
    if !authorize(headers) {
        return Err(Error::Unauthorized(
            "Invalid admin credentials".to_string(),
        ));
    }
    Ok(())
}
