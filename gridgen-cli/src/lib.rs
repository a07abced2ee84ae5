//! gridgen CLI library
//!
//! The thin orchestration layer around the pure [`gridgen`] core: command
//! implementations, the explicit run configuration, and all filesystem
//! access.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;

pub use commands::{CheckCommand, GenerateCommand};
pub use config::GeneratorConfig;
