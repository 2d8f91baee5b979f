//! JSON API consumed by the browser client.

mod error;
pub mod handlers;
pub mod requests;
pub mod responses;

pub use error::ApiError;
