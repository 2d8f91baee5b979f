pub mod config;
pub mod error;
pub mod games;
pub mod identifiers;
pub mod logger;

pub use error::{GameError, MoveError};
pub use identifiers::*;
