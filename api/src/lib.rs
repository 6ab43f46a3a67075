//! RentWheels HTTP layer: REST routes, GraphQL schema and the bearer-auth
//! middleware, all thin adapters over the `rw_core` domain services.

pub mod app;
pub mod dto;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod routes;
