use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use transify_domain::admin::AdminRole;

use crate::domain::types::AdminAccount;
use crate::error::AdminServiceError;

/// Session token lifetime in seconds (24 hours).
pub const SESSION_TOKEN_EXP: u64 = 60 * 60 * 24;

/// Claims on an admin session token. Role and organization ride along so
/// downstream layers can gate without a directory lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin account id (UUID string).
    pub sub: String,
    pub email: String,
    pub role: AdminRole,
    /// Organization id (UUID string).
    pub organization_id: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token for a freshly verified admin.
pub fn issue_session_token(
    account: &AdminAccount,
    secret: &str,
) -> Result<String, AdminServiceError> {
    let claims = SessionClaims {
        sub: account.id.to_string(),
        email: account.email.clone(),
        role: account.role,
        organization_id: account.organization_id.to_string(),
        exp: now_secs() + SESSION_TOKEN_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AdminServiceError::Internal(e.into()))
}

/// Validate a session token and return its claims.
pub fn decode_session_token(token: &str, secret: &str) -> Result<SessionClaims, AdminServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AdminServiceError::Internal(e.into()))?;

    Ok(data.claims)
}
