//! Common type definitions shared between layers

pub mod response;

pub use response::ErrorBody;
