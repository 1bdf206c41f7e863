//! Access-token lookup and verification.
//!
//! Access tokens are HS256-signed JWTs issued by the auth service and
//! carried either as `Authorization: Bearer <token>` or in a session cookie.
//! A request "has a session" when one of those carries a token that
//! verifies against the shared secret and has not expired.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use chrono::{TimeZone, Utc};
use jamboree_core::types::{DbId, Timestamp};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Default cookie carrying the access token.
const DEFAULT_COOKIE_NAME: &str = "sb-access-token";
/// Default audience stamped on tokens by the auth service.
const DEFAULT_AUDIENCE: &str = "authenticated";

/// JWT claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's id.
    pub sub: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for reading and verifying access tokens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret shared with the auth service.
    pub jwt_secret: String,
    /// Cookie name checked when there is no `Authorization` header.
    pub cookie_name: String,
    /// Required `aud` claim; `None` skips the audience check.
    pub audience: Option<String>,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var            | Required | Default            |
    /// |--------------------|----------|--------------------|
    /// | `JWT_SECRET`       | **yes**  | --                 |
    /// | `SESSION_COOKIE`   | no       | `sb-access-token`  |
    /// | `JWT_AUDIENCE`     | no       | `authenticated`    |
    ///
    /// An empty `JWT_AUDIENCE` disables the audience check.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!jwt_secret.is_empty(), "JWT_SECRET must not be empty");

        let cookie_name =
            std::env::var("SESSION_COOKIE").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.into());

        let audience = match std::env::var("JWT_AUDIENCE") {
            Ok(aud) if aud.trim().is_empty() => None,
            Ok(aud) => Some(aud),
            Err(_) => Some(DEFAULT_AUDIENCE.into()),
        };

        Self {
            jwt_secret,
            cookie_name,
            audience,
        }
    }
}

/// The verified session of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: DbId,
    pub email: Option<String>,
    pub expires_at: Timestamp,
}

/// Validate and decode an access token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &SessionConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    match &config.audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// Sign an access token the way the auth service does.
///
/// Used by local tooling and tests; production tokens come from the auth
/// service.
pub fn issue_access_token(
    user_id: DbId,
    email: Option<&str>,
    ttl_secs: i64,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        email: email.map(str::to_string),
        aud: config.audience.clone(),
        exp: now + ttl_secs,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

/// Find the raw access token: the bearer header wins over the cookie.
pub fn token_from_headers<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    if let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(token.trim());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// The current session, if the request carries a valid token.
pub fn current_session(headers: &HeaderMap, config: &SessionConfig) -> Option<Session> {
    let token = token_from_headers(headers, &config.cookie_name)?;
    match validate_token(token, config) {
        Ok(claims) => Some(Session {
            user_id: claims.sub,
            email: claims.email,
            expires_at: Utc
                .timestamp_opt(claims.exp, 0)
                .single()
                .unwrap_or_else(Utc::now),
        }),
        Err(err) => {
            tracing::debug!(error = %err, "Rejected access token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use uuid::Uuid;

    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            jwt_secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            audience: Some(DEFAULT_AUDIENCE.to_string()),
        }
    }

    fn headers(name: axum::http::HeaderName, value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(name, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn issued_token_validates() {
        let config = test_config();
        let id = Uuid::new_v4();
        let token = issue_access_token(id, Some("a@b.c"), 600, &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email.as_deref(), Some("a@b.c"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails() {
        let config = test_config();
        // Well beyond the default 60-second leeway.
        let token = issue_access_token(Uuid::new_v4(), None, -300, &config).unwrap();
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn different_secret_fails() {
        let config = test_config();
        let other = SessionConfig {
            jwt_secret: "another-secret".into(),
            ..test_config()
        };
        let token = issue_access_token(Uuid::new_v4(), None, 600, &other).unwrap();
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn wrong_audience_fails() {
        let config = test_config();
        let service = SessionConfig {
            audience: Some("service_role".into()),
            ..test_config()
        };
        let token = issue_access_token(Uuid::new_v4(), None, 600, &service).unwrap();
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn bearer_header_is_read() {
        let map = headers(AUTHORIZATION, "Bearer abc.def");
        assert_eq!(token_from_headers(&map, DEFAULT_COOKIE_NAME), Some("abc.def"));
    }

    #[test]
    fn cookie_is_read() {
        let map = headers(COOKIE, "theme=dark; sb-access-token=tok123; other=1");
        assert_eq!(token_from_headers(&map, DEFAULT_COOKIE_NAME), Some("tok123"));
        assert_eq!(token_from_headers(&map, "missing"), None);
    }

    #[test]
    fn session_from_cookie() {
        let config = test_config();
        let id = Uuid::new_v4();
        let token = issue_access_token(id, None, 600, &config).unwrap();
        let map = headers(COOKIE, &format!("sb-access-token={token}"));

        let session = current_session(&map, &config).expect("session");
        assert_eq!(session.user_id, id);
        assert!(session.expires_at > Utc::now());
    }

    #[test]
    fn garbage_token_is_no_session() {
        let config = test_config();
        assert!(current_session(&headers(AUTHORIZATION, "Bearer nope"), &config).is_none());
        assert!(current_session(&HeaderMap::new(), &config).is_none());
    }
}
