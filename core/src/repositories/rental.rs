//! Rental store trait and in-memory implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::rental::{NewRental, Rental, RentalStatus};
use crate::errors::DomainError;

/// Store contract for [`Rental`] entities.
///
/// Rentals are mutated in place by status transitions but never removed.
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Persist a new rental, assigning the next sequential id, defaulting
    /// the start date to now and the status to `ACTIVE`. Id assignment and
    /// insert are one atomic step.
    async fn insert(&self, new: NewRental) -> Result<Rental, DomainError>;

    /// Lookup by sequential id
    async fn find_by_id(&self, id: u64) -> Result<Option<Rental>, DomainError>;

    /// All rentals owned by a user, in insertion order
    async fn find_by_user(&self, user_id: u64) -> Result<Vec<Rental>, DomainError>;

    /// Replace a stored rental after a status transition
    async fn update(&self, rental: Rental) -> Result<Rental, DomainError>;

    /// Number of stored rentals
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Process-lifetime in-memory rental store
#[derive(Clone, Default)]
pub struct InMemoryRentalStore {
    rentals: Arc<RwLock<Vec<Rental>>>,
}

impl InMemoryRentalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RentalRepository for InMemoryRentalStore {
    async fn insert(&self, new: NewRental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;
        let rental = Rental {
            id: rentals.len() as u64 + 1,
            user_id: new.user_id,
            car_id: new.car_id,
            start_date: new.start_date.unwrap_or_else(|| Utc::now().to_rfc3339()),
            end_date: new.end_date,
            status: RentalStatus::Active,
        };
        rentals.push(rental.clone());
        Ok(rental)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        Ok(rentals.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: u64) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        Ok(rentals
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, rental: Rental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;
        match rentals.iter_mut().find(|r| r.id == rental.id) {
            Some(stored) => {
                *stored = rental.clone();
                Ok(rental)
            }
            None => Err(DomainError::NotFound { resource: "Rental" }),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.rentals.read().await.len())
    }
}
