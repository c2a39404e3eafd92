use anyhow::Result as Fallible;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::OffsetDateTime;

use crate::core::{entities::Id, usecases::Error as ParameterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id
    sub: String,
    /// Expiry time as Unix timestamp
    exp: i64,
    iat: i64,
    /// Makes tokens issued within the same second distinct
    jti: String,
    kind: TokenKind,
}

/// generate a random secret (256 bit, base64 encoded)
fn generate_secret() -> String {
    BASE64.encode(rand::random::<[u8; 32]>())
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Issues and verifies the signed access and refresh tokens.
pub struct JwtState {
    key: Key,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl JwtState {
    pub fn new(secret: Option<&str>, access_token_ttl: Duration, refresh_token_ttl: Duration) -> Self {
        let key = match secret {
            Some(secret) => Key::new(secret),
            None => {
                warn!("No JWT secret configured: all tokens become invalid on restart");
                Key::new(&generate_secret())
            }
        };
        Self {
            key,
            access_token_ttl,
            refresh_token_ttl,
        }
    }

    pub fn generate_access_token(&self, user_id: &Id) -> Fallible<String> {
        self.generate_token(user_id, TokenKind::Access, self.access_token_ttl)
    }

    pub fn generate_refresh_token(&self, user_id: &Id) -> Fallible<String> {
        self.generate_token(user_id, TokenKind::Refresh, self.refresh_token_ttl)
    }

    pub fn validate_access_token(&self, token: &str) -> Result<Id, ParameterError> {
        self.validate_token(token, TokenKind::Access)
    }

    pub fn validate_refresh_token(&self, token: &str) -> Result<Id, ParameterError> {
        self.validate_token(token, TokenKind::Refresh)
    }

    fn generate_token(&self, user_id: &Id, kind: TokenKind, ttl: Duration) -> Fallible<String> {
        let iat = OffsetDateTime::now_utc().unix_timestamp();
        let exp = iat.saturating_add(i64::try_from(ttl.as_secs())?);
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat,
            jti: uuid::Uuid::new_v4().simple().to_string(),
            kind,
        };
        Ok(encode(&Header::default(), &claims, &self.key.encoding_key)?)
    }

    fn validate_token(&self, token: &str, kind: TokenKind) -> Result<Id, ParameterError> {
        let claims = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => ParameterError::TokenExpired,
                _ => {
                    debug!("Rejected {kind:?} token: {err}");
                    ParameterError::TokenInvalid
                }
            })?
            .claims;
        if claims.kind != kind {
            debug!("Expected {kind:?} token but got {:?}", claims.kind);
            return Err(ParameterError::TokenInvalid);
        }
        Ok(claims.sub.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_state() -> JwtState {
        JwtState::new(
            Some("secret"),
            Duration::from_secs(60),
            Duration::from_secs(3600),
        )
    }

    #[test]
    fn validation_works() {
        let jwt_state = jwt_state();
        let user_id = Id::new();
        let token = jwt_state.generate_access_token(&user_id).unwrap();
        assert_eq!(user_id, jwt_state.validate_access_token(&token).unwrap());
    }

    #[test]
    fn access_and_refresh_tokens_are_not_interchangeable() {
        let jwt_state = jwt_state();
        let user_id = Id::new();
        let access = jwt_state.generate_access_token(&user_id).unwrap();
        let refresh = jwt_state.generate_refresh_token(&user_id).unwrap();
        assert!(matches!(
            jwt_state.validate_refresh_token(&access),
            Err(ParameterError::TokenInvalid)
        ));
        assert!(matches!(
            jwt_state.validate_access_token(&refresh),
            Err(ParameterError::TokenInvalid)
        ));
        assert_eq!(user_id, jwt_state.validate_refresh_token(&refresh).unwrap());
    }

    #[test]
    fn tokens_of_the_same_second_differ() {
        let jwt_state = jwt_state();
        let user_id = Id::new();
        let first = jwt_state.generate_refresh_token(&user_id).unwrap();
        let second = jwt_state.generate_refresh_token(&user_id).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn reject_foreign_and_garbage_tokens() {
        let foreign = JwtState::new(None, Duration::from_secs(60), Duration::from_secs(60))
            .generate_access_token(&Id::new())
            .unwrap();
        let jwt_state = jwt_state();
        assert!(matches!(
            jwt_state.validate_access_token(&foreign),
            Err(ParameterError::TokenInvalid)
        ));
        assert!(matches!(
            jwt_state.validate_access_token("dubidubidu"),
            Err(ParameterError::TokenInvalid)
        ));
    }

    #[test]
    fn expired_token() {
        let jwt_state = jwt_state();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: "u1".into(),
            exp: now - 3600,
            iat: now - 7200,
            jti: "j".into(),
            kind: TokenKind::Access,
        };
        let token = encode(&Header::default(), &claims, &jwt_state.key.encoding_key).unwrap();
        assert!(matches!(
            jwt_state.validate_access_token(&token),
            Err(ParameterError::TokenExpired)
        ));
    }
}
