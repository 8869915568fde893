use jsonwebtoken::{decode, encode, get_current_timestamp, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

impl TokenClaims {
    pub fn new(sub: Uuid, role: UserRole, ttl_secs: u64) -> Self {
        let now = get_current_timestamp();
        Self {
            sub,
            role,
            exp: (now + ttl_secs) as usize,
            iat: now as usize,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

pub fn encode_claims(secret: &str, claims: &TokenClaims) -> jsonwebtoken::errors::Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Signs an HS256 access token for `sub`.
pub fn issue_token(
    secret: &str,
    sub: Uuid,
    role: UserRole,
    ttl_secs: u64,
) -> jsonwebtoken::errors::Result<String> {
    encode_claims(secret, &TokenClaims::new(sub, role, ttl_secs))
}

/// Checks signature and expiry, returning the embedded claims.
pub fn verify_token(secret: &str, token: &str) -> jsonwebtoken::errors::Result<TokenClaims> {
    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let sub = Uuid::new_v4();
        let token = issue_token(SECRET, sub, UserRole::Admin, 60).unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, sub);
        assert!(claims.is_admin());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token("other", Uuid::new_v4(), UserRole::User, 60).unwrap();
        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = get_current_timestamp() as usize;
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            role: UserRole::User,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode_claims(SECRET, &claims).unwrap();

        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn roles_serialize_in_upper_case() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"USER\"");
    }
}
