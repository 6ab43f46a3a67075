//! Domain entities

pub mod rental;
pub mod user;

pub use rental::{CarId, NewRental, Rental, RentalStatus};
pub use user::{NewUser, User, UserProfile};
