//! User registration and authentication service

use crate::domain::entities::user::{NewUser, User, UserProfile};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Service owning user creation, lookup and credential verification.
///
/// All mutations are confined to the injected store; the only other side
/// effect is the bcrypt hashing work.
pub struct UserService<R: UserRepository> {
    store: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service over the given store
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// The duplicate-email check runs first, before any validation-triggered
    /// hashing work. Validation collects every violated rule into one
    /// aggregated failure.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> DomainResult<UserProfile> {
        if self.store.find_by_email(email).await?.is_some() {
            return Err(DomainError::DuplicateEmail);
        }

        let violations = User::validate_registration(email, password);
        if !violations.is_empty() {
            return Err(DomainError::validation(violations));
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            })?;

        let user = self
            .store
            .insert(NewUser {
                email: email.to_string(),
                password_hash,
                name: name.to_string(),
            })
            .await?;

        tracing::debug!(user_id = user.id, "user registered");
        Ok(user.profile())
    }

    /// Exact-match lookup returning the full internal entity, digest
    /// included. For internal authentication use only.
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.store.find_by_email(email).await
    }

    /// Lookup by id, returning the externally safe projection
    pub async fn find_by_id(&self, id: u64) -> DomainResult<Option<UserProfile>> {
        Ok(self.store.find_by_id(id).await?.map(|u| u.profile()))
    }

    /// Verify credentials.
    ///
    /// Unknown email and wrong password stay distinct here; the handlers
    /// collapse both into the same outward "Invalid credentials" message so
    /// callers cannot enumerate accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<UserProfile> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound { resource: "User" })?;

        let verified =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {}", e),
            })?;

        if !verified {
            return Err(DomainError::InvalidCredentials);
        }

        Ok(user.profile())
    }
}
