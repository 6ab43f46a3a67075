//! Business services driving the domain layer

pub mod rental;
pub mod token;
pub mod user;

pub use rental::RentalService;
pub use token::{Claims, TokenService};
pub use user::UserService;
