use super::{types::Config, ConfigError};
use crate::config::AuthMethod;

/// Validate configuration
/// Currently validates:
/// - Auth section exists (enforced by serde)
/// - Server port is not 0
/// - static_tokens has a non-empty token table with non-empty tokens
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Auth validation
    if config.auth.method == AuthMethod::StaticTokens {
        let tokens = config.auth.tokens.as_deref().unwrap_or_default();
        if tokens.is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.tokens must be non-empty when method is static_tokens".to_string(),
            ));
        }
        if tokens.iter().any(|entry| entry.token.is_empty()) {
            return Err(ConfigError::ValidationError(
                "auth.tokens entries cannot have an empty token".to_string(),
            ));
        }
    }

    Ok(())
}
