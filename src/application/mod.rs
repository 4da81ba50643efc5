//! Application layer: garden management and cross-garden analytics
//!
//! This layer orchestrates the domain entities owned by a `GardenManager`.

pub mod error;
pub mod manager;

pub use error::{ApplicationError, ApplicationResult};
pub use manager::{GardenManager, ManagerCounter, NetworkAnalytics};
