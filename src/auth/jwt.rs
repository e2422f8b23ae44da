//! Signed bearer tokens (HS256).

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User id as text
    pub uid: i32,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and verifies tokens with one shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        TokenIssuer {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a token binding `user_id`, expiring `ttl` from now.
    pub fn sign(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp().max(0) as usize;
        self.sign_at(user_id, now)
    }

    fn sign_at(&self, user_id: i32, issued_at: usize) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            uid: user_id,
            iat: issued_at,
            exp: issued_at + self.ttl.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_token_verifies_and_binds_user_id() {
        let issuer = TokenIssuer::new("test-secret", Duration::from_secs(3600));
        let token = issuer.sign(42).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let ours = TokenIssuer::new("ours", Duration::from_secs(3600));
        let theirs = TokenIssuer::new("theirs", Duration::from_secs(3600));
        let token = theirs.sign(1).unwrap();
        assert!(ours.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("test-secret", Duration::from_secs(3600));
        // Issued two hours ago with a one hour lifetime.
        let issued = Utc::now().timestamp() as usize - 7200;
        let token = issuer.sign_at(5, issued).unwrap();
        assert!(issuer.verify(&token).is_err());
    }
}
