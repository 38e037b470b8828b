//! Static bearer-token authentication.

use async_trait::async_trait;

use super::{AuthError, AuthRequest, Authenticator, Identity};
use crate::config::TokenEntry;

/// Authenticator that validates requests against a configured token table.
///
/// Accepts the token in either:
/// - `Authorization: Bearer <token>` header
/// - `X-API-Key: <token>` header
///
/// The identity - user id, email and role - is resolved from the matching
/// table entry. The role is a claim carried on the token's entry, never a
/// value the caller supplies alongside it.
pub struct StaticTokenAuthenticator {
    entries: Vec<TokenEntry>,
}

impl StaticTokenAuthenticator {
    pub fn new(entries: Vec<TokenEntry>) -> Self {
        Self { entries }
    }

    /// Extract the token from request headers.
    /// Checks Authorization: Bearer and X-API-Key headers.
    fn extract_token(request: &AuthRequest) -> Option<String> {
        if let Some(auth_header) = request.headers.get("authorization") {
            if let Some(token) = auth_header.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
            if let Some(token) = auth_header.strip_prefix("bearer ") {
                return Some(token.to_string());
            }
        }

        if let Some(token) = request.headers.get("x-api-key") {
            return Some(token.clone());
        }

        None
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Identity, AuthError> {
        let provided = Self::extract_token(request).ok_or(AuthError::NotAuthenticated)?;

        for entry in &self.entries {
            if constant_time_eq(provided.as_bytes(), entry.token.as_bytes()) {
                return Ok(Identity {
                    user_id: entry.user_id.clone(),
                    email: entry.email.clone(),
                    role: entry.role,
                });
            }
        }

        Err(AuthError::InvalidCredentials("Unknown token".to_string()))
    }

    fn method_name(&self) -> &'static str {
        "static_tokens"
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use std::net::IpAddr;

    fn make_request(headers: Vec<(&str, &str)>) -> AuthRequest {
        AuthRequest {
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            source_ip: "127.0.0.1".parse::<IpAddr>().unwrap(),
        }
    }

    fn instructor_entry() -> TokenEntry {
        TokenEntry {
            token: "secret-token-123".to_string(),
            user_id: "user-1".to_string(),
            email: Some("grace@example.com".to_string()),
            role: Role::Instructor,
        }
    }

    #[tokio::test]
    async fn test_bearer_token_resolves_identity_with_role_claim() {
        let auth = StaticTokenAuthenticator::new(vec![instructor_entry()]);
        let request = make_request(vec![("Authorization", "Bearer secret-token-123")]);

        let identity = auth.authenticate(&request).await.unwrap();

        assert_eq!(identity.user_id, "user-1");
        assert_eq!(identity.email.as_deref(), Some("grace@example.com"));
        assert_eq!(identity.role, Role::Instructor);
    }

    #[tokio::test]
    async fn test_x_api_key_header_valid() {
        let auth = StaticTokenAuthenticator::new(vec![instructor_entry()]);
        let request = make_request(vec![("X-API-Key", "secret-token-123")]);

        let identity = auth.authenticate(&request).await.unwrap();
        assert_eq!(identity.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let auth = StaticTokenAuthenticator::new(vec![instructor_entry()]);
        let request = make_request(vec![("Authorization", "Bearer wrong-token")]);

        let result = auth.authenticate(&request).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let auth = StaticTokenAuthenticator::new(vec![instructor_entry()]);
        let request = make_request(vec![]);

        let result = auth.authenticate(&request).await;
        assert!(matches!(result, Err(AuthError::NotAuthenticated)));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hell"));
        assert!(constant_time_eq(b"", b""));
    }
}
