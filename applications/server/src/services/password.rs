/// Password service - bcrypt hashing and verification
use crate::error::{Result, ServerError};

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    ///
    /// A malformed hash is an error, not a mismatch.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Hash on the blocking pool so request tasks keep running
    pub async fn hash(&self, password: &str) -> Result<String> {
        let service = *self;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || service.hash_password(&password))
            .await
            .map_err(|e| ServerError::Internal(format!("Hashing task failed: {}", e)))?
    }

    /// Verify on the blocking pool so request tasks keep running
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let service = *self;
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || service.verify_password(&password, &hash))
            .await
            .map_err(|e| ServerError::Internal(format!("Verification task failed: {}", e)))?
    }
}
