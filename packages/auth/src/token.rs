// ABOUTME: Stateless bearer-token mint and verify (HS256 JWT)
// ABOUTME: Holds the process-wide signing secret, read once at startup

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

/// Claims embedded in every issued token. Verification is stateless: the
/// user id comes straight from the signed payload, never from a lookup.
///
/// There is deliberately no `exp` claim; issued tokens stay valid for as
/// long as the signing secret does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
}

/// Signs and verifies bearer tokens with a shared HS256 secret.
///
/// Built once from configuration and shared immutably for the process
/// lifetime; regenerating the key would invalidate every outstanding token.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Mint a token asserting the given user identity.
    pub fn mint(&self, user_id: &str) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: Utc::now().timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a presented token and return the embedded user id.
    /// Performs no I/O.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Token verification failed");
                AuthError::InvalidToken
            })?;

        Ok(data.claims.sub)
    }
}
