//! Rental lifecycle service

use crate::domain::entities::rental::{CarId, NewRental, Rental};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RentalRepository;

/// Service owning rental creation and the rental state machine.
///
/// Ownership checks on mutation are the caller's concern: the service
/// operates on ids only and never dereferences `user_id` into a live user.
pub struct RentalService<R: RentalRepository> {
    store: R,
}

impl<R: RentalRepository> RentalService<R> {
    /// Create a new rental service over the given store
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Rent a car for a user.
    ///
    /// Missing relational fields fail before full validation, and nothing
    /// reaches the store on any failure path.
    pub async fn rent_car(
        &self,
        user_id: u64,
        car_id: Option<CarId>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> DomainResult<Rental> {
        if user_id == 0 {
            return Err(DomainError::MissingField { field: "User" });
        }
        let car_id = car_id.ok_or(DomainError::MissingField { field: "Car" })?;

        let new = NewRental {
            user_id,
            car_id,
            start_date,
            end_date,
        };

        let violations = new.validate();
        if !violations.is_empty() {
            return Err(DomainError::validation(violations));
        }

        let rental = self.store.insert(new).await?;
        tracing::debug!(rental_id = rental.id, user_id, "rental created");
        Ok(rental)
    }

    /// Lookup by id
    pub async fn get_rental_by_id(&self, id: u64) -> DomainResult<Option<Rental>> {
        self.store.find_by_id(id).await
    }

    /// All rentals owned by a user, in insertion order
    pub async fn get_rentals_by_user(&self, user_id: u64) -> DomainResult<Vec<Rental>> {
        self.store.find_by_user(user_id).await
    }

    /// Transition a rental to `COMPLETED`, backfilling its end date with
    /// the current time only when unset
    pub async fn complete_rental(&self, id: u64) -> DomainResult<Rental> {
        let mut rental = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { resource: "Rental" })?;

        rental.complete();
        self.store.update(rental).await
    }

    /// Transition a rental to `CANCELLED` unconditionally
    pub async fn cancel_rental(&self, id: u64) -> DomainResult<Rental> {
        let mut rental = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { resource: "Rental" })?;

        rental.cancel();
        let rental = self.store.update(rental).await?;
        tracing::debug!(rental_id = rental.id, "rental cancelled");
        Ok(rental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::rental::RentalStatus;
    use crate::repositories::InMemoryRentalStore;

    fn service() -> RentalService<InMemoryRentalStore> {
        RentalService::new(InMemoryRentalStore::new())
    }

    #[tokio::test]
    async fn rent_car_assigns_sequential_ids() {
        let svc = service();
        for n in 1..=4u64 {
            let rental = svc
                .rent_car(1, Some(CarId::from("C1")), None, None)
                .await
                .unwrap();
            assert_eq!(rental.id, n);
        }
    }

    #[tokio::test]
    async fn missing_car_fails_before_any_store_mutation() {
        let svc = service();
        let err = svc.rent_car(1, None, None, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Car required");
        assert_eq!(svc.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_user_fails_before_any_store_mutation() {
        let svc = service();
        let err = svc
            .rent_car(0, Some(CarId::from("C1")), None, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User required");
        assert_eq!(svc.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn explicit_dates_are_kept() {
        let svc = service();
        let rental = svc
            .rent_car(
                1,
                Some(CarId::from(42)),
                Some("2024-06-01T00:00:00Z".to_string()),
                Some("2024-06-05T00:00:00Z".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(rental.start_date, "2024-06-01T00:00:00Z");
        assert_eq!(rental.end_date.as_deref(), Some("2024-06-05T00:00:00Z"));
    }

    #[tokio::test]
    async fn listing_filters_by_owner() {
        let svc = service();
        svc.rent_car(1, Some(CarId::from("C1")), None, None).await.unwrap();
        svc.rent_car(2, Some(CarId::from("C2")), None, None).await.unwrap();
        svc.rent_car(1, Some(CarId::from("C3")), None, None).await.unwrap();

        let mine = svc.get_rentals_by_user(1).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.user_id == 1));
    }

    #[tokio::test]
    async fn complete_then_cancel_does_not_error() {
        let svc = service();
        let rental = svc
            .rent_car(1, Some(CarId::from("C1")), None, None)
            .await
            .unwrap();

        let completed = svc.complete_rental(rental.id).await.unwrap();
        assert_eq!(completed.status, RentalStatus::Completed);
        assert!(completed.end_date.is_some());

        // Reference permissiveness: only a missing id raises.
        let cancelled = svc.cancel_rental(rental.id).await.unwrap();
        assert_eq!(cancelled.status, RentalStatus::Cancelled);
    }

    #[tokio::test]
    async fn unknown_id_raises_not_found() {
        let svc = service();
        let err = svc.cancel_rental(999_999).await.unwrap_err();
        assert_eq!(err.to_string(), "Rental not found");

        let err = svc.complete_rental(999_999).await.unwrap_err();
        assert_eq!(err.to_string(), "Rental not found");
    }
}
