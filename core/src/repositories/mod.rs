//! Store interfaces and their in-memory implementations.
//!
//! Each entity type has exactly one store owning its collection and its id
//! counter. Stores are explicit objects injected into services, which keeps
//! tests isolated without reset-between-tests plumbing. The trait seam
//! exists so durable storage could be swapped in behind the same interface.

pub mod rental;
pub mod user;

pub use rental::{InMemoryRentalStore, RentalRepository};
pub use user::{InMemoryUserStore, UserRepository};
