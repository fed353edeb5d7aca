//! One-way password hashing
//!
//! bcrypt is CPU bound, so both directions run on the blocking pool.

use crate::error::DbError;

/// Hashes `password` with the given bcrypt cost.
pub async fn hash_password(password: String, cost: u32) -> Result<String, DbError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DbError::HashError(e.to_string()))?
        .map_err(|e| DbError::HashError(e.to_string()))
}

/// Checks `password` against a stored hash.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, DbError> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DbError::HashError(e.to_string()))?;
    Ok(verified.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_only_the_original_password() {
        let hash = hash_password("password1".to_string(), 4).await.unwrap();

        assert_ne!(hash, "password1");
        assert!(verify_password("password1".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password("password2".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn garbage_hash_is_a_mismatch() {
        let verified = verify_password("password1".to_string(), "not-a-hash".to_string())
            .await
            .unwrap();
        assert!(!verified);
    }
}
