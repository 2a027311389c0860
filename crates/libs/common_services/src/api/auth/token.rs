use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

/// A refresh token split for storage: the selector is looked up in plain
/// text, the verifier is only ever stored hashed.
pub struct RefreshTokenParts {
    pub raw_token: String,
    pub selector: String,
    pub verifier_hash: String,
}

/// Generates a fresh refresh token and its storage parts.
pub fn generate_refresh_token_parts() -> Result<RefreshTokenParts, AuthError> {
    let mut raw_bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut raw_bytes);

    let selector = URL_SAFE_NO_PAD.encode(&raw_bytes[..16]);
    let raw_token = URL_SAFE_NO_PAD.encode(raw_bytes);
    let verifier_hash = hash_password(&raw_bytes[16..])?;

    Ok(RefreshTokenParts {
        raw_token,
        selector,
        verifier_hash,
    })
}

/// Splits a raw refresh token back into its selector and verifier bytes.
pub fn split_refresh_token(token: &str) -> Result<(String, Vec<u8>), AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| AuthError::InvalidToken)?;

    if bytes.len() != 32 {
        return Err(AuthError::InvalidToken);
    }

    let selector = URL_SAFE_NO_PAD.encode(&bytes[..16]);
    Ok((selector, bytes[16..].to_vec()))
}

/// Checks verifier bytes against the stored verifier hash.
pub fn verify_token(verifier_bytes: &[u8], verifier_hash: &str) -> Result<bool, AuthError> {
    Ok(verify_password(verifier_bytes, verifier_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_splits_and_verifies() {
        let parts = generate_refresh_token_parts().unwrap();
        let (selector, verifier) = split_refresh_token(&parts.raw_token).unwrap();
        assert_eq!(selector, parts.selector);
        assert!(verify_token(&verifier, &parts.verifier_hash).unwrap());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            split_refresh_token("not-base64!!"),
            Err(AuthError::InvalidToken)
        ));
        let short = URL_SAFE_NO_PAD.encode(b"short");
        assert!(matches!(
            split_refresh_token(&short),
            Err(AuthError::InvalidToken)
        ));
    }
}
