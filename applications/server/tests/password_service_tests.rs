/// Password service tests
/// Tests bcrypt hashing, verification, and off-runtime execution
use postbox_server::services::password::{PasswordService, MIN_COST};
use postbox_server::ServerError;
use proptest::prelude::*;

fn create_test_password_service() -> PasswordService {
    PasswordService::new(MIN_COST)
}

/// Test password hashing produces valid bcrypt hashes
#[tokio::test]
async fn test_password_hashing() {
    let passwords = create_test_password_service();

    let password = "MySecurePassword123!";
    let hash = passwords.hash(password).await.unwrap();

    // Verify hash format (bcrypt starts with $2b$ or $2a$)
    assert!(hash.starts_with("$2b$") || hash.starts_with("$2a$"));
    assert_eq!(hash.len(), 60);

    // Verify the hash is different each time (salt is random)
    let hash2 = passwords.hash(password).await.unwrap();
    assert_ne!(hash, hash2, "Hashes should differ due to random salt");
}

/// Test password verification with correct password
#[tokio::test]
async fn test_password_verification_success() {
    let passwords = create_test_password_service();

    let hash = passwords.hash("MySecurePassword123!").await.unwrap();

    let result = passwords.verify("MySecurePassword123!", &hash).await.unwrap();
    assert!(result, "Correct password should verify successfully");
}

/// Test password verification with incorrect password
#[tokio::test]
async fn test_password_verification_failure() {
    let passwords = create_test_password_service();

    let hash = passwords.hash("MySecurePassword123!").await.unwrap();

    let result = passwords.verify("WrongPassword", &hash).await.unwrap();
    assert!(!result, "Incorrect password should not verify");
}

/// Test password verification with invalid hash format
#[tokio::test]
async fn test_password_verification_invalid_hash() {
    let passwords = create_test_password_service();

    let result = passwords.verify("password", "not-a-valid-hash").await;
    assert!(
        matches!(result, Err(ServerError::Bcrypt(_))),
        "Invalid hash should return a bcrypt error"
    );
}

/// Hashes made at one cost verify under a service configured with another
#[tokio::test]
async fn test_verification_ignores_configured_cost() {
    let hash = PasswordService::new(5).hash("secret").await.unwrap();

    let verified = create_test_password_service()
        .verify("secret", &hash)
        .await
        .unwrap();
    assert!(verified);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: the hash never equals the plaintext, and the plaintext verifies
    #[test]
    fn hash_never_equals_plaintext_and_verifies(password in "[ -~]{1,48}") {
        let passwords = create_test_password_service();

        let hash = passwords.hash_password(&password).unwrap();

        prop_assert_ne!(&hash, &password);
        prop_assert!(passwords.verify_password(&password, &hash).unwrap());
    }

    /// Property: a different password never verifies
    #[test]
    fn different_password_is_rejected(
        password in "[a-z]{1,24}",
        suffix in "[A-Z0-9]{1,8}",
    ) {
        let passwords = create_test_password_service();

        let hash = passwords.hash_password(&password).unwrap();
        let other = format!("{}{}", password, suffix);

        prop_assert!(!passwords.verify_password(&other, &hash).unwrap());
    }
}
