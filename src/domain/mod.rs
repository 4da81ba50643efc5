//! Domain layer: plant entities, gardens and statistics
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod garden;
pub mod plant;
pub mod statistics;

pub use error::{DomainError, DomainResult};
pub use garden::{Garden, GardenReport, GrowthEvent, PlantCensus};
pub use plant::{Plant, PlantClass, PlantKind, PlantTraits};
