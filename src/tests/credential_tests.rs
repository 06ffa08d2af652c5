use crate::core::credentials::CredentialService;
use crate::core::errors::FlatgateError;
use crate::core::models::user::User;
use crate::infrastructure::storage::RecordStore;
use crate::infrastructure::storage::in_memory::InMemoryStore;
use crate::infrastructure::storage::json_file::JsonFileStore;
use crate::tests::create_test_credentials;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_create_then_sign_in() {
    let service = create_test_credentials();
    let created = service.create_user("a@b.com", "p1", "Alice").await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.email, "a@b.com");
    assert_eq!(created.name, "Alice");

    let signed_in = service.sign_in("a@b.com", "p1").await.unwrap().unwrap();
    assert_eq!(signed_in, created);

    let json = serde_json::to_value(&signed_in).unwrap();
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_sign_in_normalizes_email_for_lookup() {
    let service = create_test_credentials();
    service.create_user("Mixed@Case.com", "pw", "").await.unwrap();

    let identity = service.sign_in("  mixed@CASE.com ", "pw").await.unwrap().unwrap();
    assert_eq!(identity.email, "Mixed@Case.com");
}

#[tokio::test]
async fn test_sign_in_unknown_email_and_wrong_password_look_the_same() {
    let service = create_test_credentials();
    service.create_user("a@b.com", "p1", "").await.unwrap();

    assert_eq!(service.sign_in("nobody@b.com", "p1").await.unwrap(), None);
    assert_eq!(service.sign_in("a@b.com", "P1").await.unwrap(), None);
    assert_eq!(service.sign_in("a@b.com", "p1 ").await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_email_is_case_insensitive() {
    let service = create_test_credentials();
    service.create_user("A@x.com", "one", "").await.unwrap();

    let result = service.create_user("a@x.com", "two", "").await;
    assert!(matches!(result, Err(FlatgateError::EmailAlreadyRegistered(_))));

    let users = service.storage().read_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].password, "one");
}

#[tokio::test]
async fn test_create_user_trims_and_keeps_password_verbatim() {
    let service = create_test_credentials();
    let created = service.create_user("  c@d.com\t", " spaced pw ", "  Carol ").await.unwrap();
    assert_eq!(created.email, "c@d.com");
    assert_eq!(created.name, "Carol");

    let stored = service.storage().read_all().await.unwrap();
    assert_eq!(
        stored,
        vec![User {
            id: created.id.clone(),
            email: "c@d.com".to_string(),
            password: " spaced pw ".to_string(),
            name: "Carol".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_created_ids_are_unique_and_insertion_order_is_kept() {
    let service = create_test_credentials();
    let first = service.create_user("1@x.com", "p", "").await.unwrap();
    let second = service.create_user("2@x.com", "p", "").await.unwrap();
    let third = service.create_user("3@x.com", "p", "").await.unwrap();
    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);

    let emails: Vec<String> = service
        .storage()
        .read_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.email)
        .collect();
    assert_eq!(emails, vec!["1@x.com", "2@x.com", "3@x.com"]);
}

#[tokio::test]
async fn test_sign_in_uses_first_matching_record() {
    let store = InMemoryStore::with_users(vec![
        User {
            id: "first".to_string(),
            email: "dup@x.com".to_string(),
            password: "one".to_string(),
            name: "First".to_string(),
        },
        User {
            id: "second".to_string(),
            email: "DUP@x.com".to_string(),
            password: "two".to_string(),
            name: "Second".to_string(),
        },
    ]);
    let service = CredentialService::new(store);

    let identity = service.sign_in("dup@x.com", "one").await.unwrap().unwrap();
    assert_eq!(identity.id, "first");
    // The second record is shadowed by the first one's email.
    assert_eq!(service.sign_in("dup@x.com", "two").await.unwrap(), None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creates_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let service = Arc::new(CredentialService::new(JsonFileStore::new(dir.path().join("users.json"))));

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.create_user(&format!("user{}@x.com", i), "pw", "").await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Overlapping read-modify-write cycles may drop users, but the store stays readable.
    let stored = service.storage().read_all().await.unwrap();
    assert!(!stored.is_empty() && stored.len() <= 64);
}
