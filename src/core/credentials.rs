use crate::core::errors::FlatgateError;
use crate::core::models::user::{Identity, User, normalize_email};
use crate::infrastructure::storage::RecordStore;
use tracing::{debug, info};
use uuid::Uuid;

/// Sign-in and user creation on top of a [`RecordStore`].
pub struct CredentialService<S: RecordStore> {
    storage: S,
}

impl<S: RecordStore> CredentialService<S> {
    pub fn new(storage: S) -> Self {
        CredentialService { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the identity of the first user whose email matches (ignoring case
    /// and surrounding whitespace) and whose password is an exact match.
    ///
    /// An unknown email and a wrong password both yield `Ok(None)`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Option<Identity>, FlatgateError> {
        let wanted = normalize_email(email);
        let users = self.storage.read_all().await?;

        let identity = users
            .iter()
            .find(|user| normalize_email(&user.email) == wanted)
            .filter(|user| user.password == password)
            .map(Identity::from);

        debug!("Sign-in for {} matched: {}", wanted, identity.is_some());
        Ok(identity)
    }

    pub async fn create_user(&self, email: &str, password: &str, name: &str) -> Result<Identity, FlatgateError> {
        let wanted = normalize_email(email);
        let mut users = self.storage.read_all().await?;

        if users.iter().any(|user| normalize_email(&user.email) == wanted) {
            return Err(FlatgateError::EmailAlreadyRegistered(email.trim().to_string()));
        }

        let user = User {
            id: Uuid::now_v7().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            name: name.trim().to_string(),
        };
        let identity = Identity::from(&user);
        users.push(user);
        self.storage.write_all(&users).await?;

        info!("Created user {} <{}>", identity.id, identity.email);
        Ok(identity)
    }
}
