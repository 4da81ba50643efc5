//! gardenkit: plant hierarchy, gardens and cross-garden analytics
//!
//! Layers, leaf-first:
//! - `domain`: plant entities, gardens, stateless statistics
//! - `application`: the garden manager and network analytics
//! - `config`: layered settings
//! - `cli`: argument parsing and command handlers

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
