/// Authentication service - JWT and password handling
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    token_expiration: Duration,
}

/// Token claims: the subject is the user's email, which the auth middleware
/// resolves back to a user record on every request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user email)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl AuthService {
    pub fn new(secret: String, token_expiry_minutes: i64) -> Self {
        Self {
            secret,
            token_expiration: Duration::minutes(token_expiry_minutes),
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Create an access token bound to `email`
    pub fn create_token(&self, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.token_expiration;

        let claims = Claims {
            sub: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::from)
    }

    /// Verify a token and return the subject email.
    ///
    /// Fails on a bad signature, malformed token, missing subject or elapsed
    /// expiry. Whether the subject still names an existing user is checked
    /// separately by the auth middleware.
    pub fn verify_token(&self, token: &str) -> Result<String> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        if token_data.claims.sub.is_empty() {
            return Err(ServerError::Auth("Token has no subject".to_string()));
        }
        Ok(token_data.claims.sub)
    }
}
