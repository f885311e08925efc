use super::config::JwtConfig;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// What a token asserts about its bearer: the account id and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub sub: String,
    pub email: String,
}

/// Decoded claims of a verified access token.
///
/// Handlers behind the auth guard read these from request extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs payloads into access tokens and verifies them back into claims.
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, payload: &TokenPayload) -> eyre::Result<String>;

    /// Fails on a bad signature, an expired token or a malformed payload.
    fn verify(&self, token: &str) -> eyre::Result<TokenClaims>;
}

impl<T: TokenIssuer + ?Sized> TokenIssuer for Arc<T> {
    fn sign(&self, payload: &TokenPayload) -> eyre::Result<String> {
        (**self).sign(payload)
    }

    fn verify(&self, token: &str) -> eyre::Result<TokenClaims> {
        (**self).verify(token)
    }
}

/// HS256 JWT issuer keyed by a shared secret.
#[derive(Clone)]
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: Duration,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        tracing::info!(expires_in = ?config.expires_in, "JWT auth initialized");
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expires_in: config.expires_in,
        }
    }
}

impl TokenIssuer for JwtAuth {
    fn sign(&self, payload: &TokenPayload) -> eyre::Result<String> {
        let iat = Utc::now().timestamp();
        let lifetime = i64::try_from(self.expires_in.as_secs())?;

        let claims = TokenClaims {
            sub: payload.sub.clone(),
            email: payload.email.clone(),
            iat,
            exp: iat + lifetime,
        };

        let header = Header {
            alg: Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(&header, &claims, &self.encoding_key)?;
        Ok(token)
    }

    fn verify(&self, token: &str) -> eyre::Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET).unwrap())
    }

    fn payload() -> TokenPayload {
        TokenPayload {
            sub: "0190f3a1-0000-7000-8000-000000000001".to_string(),
            email: "test@mail.com".to_string(),
        }
    }

    #[test]
    fn test_sign_then_verify_returns_payload() {
        let auth = auth();
        let token = auth.sign(&payload()).unwrap();

        let claims = auth.verify(&token).unwrap();
        assert_eq!(claims.sub, payload().sub);
        assert_eq!(claims.email, payload().email);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_configured_lifetime_sets_expiry() {
        let config = JwtConfig::new(SECRET)
            .unwrap()
            .with_expires_in(Duration::from_secs(900));
        let auth = JwtAuth::new(&config);

        let claims = auth.verify(&auth.sign(&payload()).unwrap()).unwrap();
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_claims_carry_only_identity_and_timestamps() {
        let token = auth().sign(&payload()).unwrap();
        let raw = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        let mut keys: Vec<_> = raw.claims.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["email", "exp", "iat", "sub"]);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = auth().sign(&payload()).unwrap();
        let other = JwtAuth::new(&JwtConfig::new("another-secret-that-is-long-enough!!").unwrap());
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: payload().sub,
            email: payload().email,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(auth().verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(auth().verify("not.a.jwt").is_err());
        assert!(auth().verify("").is_err());
    }
}
