use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use color_eyre::eyre::eyre;

/// Hashes a password (or token verifier) with Argon2 and a fresh salt.
pub fn hash_password(password: &[u8]) -> color_eyre::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password, &salt)
        .map_err(|e| eyre!("password hashing failed: {e}"))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored Argon2 hash.
pub fn verify_password(password: &[u8], hash: &str) -> color_eyre::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| eyre!("stored hash is invalid: {e}"))?;
    Ok(Argon2::default().verify_password(password, &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password(b"segredo").unwrap();
        assert!(verify_password(b"segredo", &hash).unwrap());
        assert!(!verify_password(b"errado", &hash).unwrap());
    }
}
