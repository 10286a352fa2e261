//! gh-trending-analyzer crate
//!
//! This crate is an implementation detail of the `gh-trending-analyzer` tool. Its API is fluid and may
//! change without warning and in a semver-incompatible way.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and the run driver
//! - [`config`]: Configuration file loading and validation
//! - [`facts`]: Hosting API client, search query construction, and wire types
//! - [`signals`]: Heuristic extractors that score a README and repository metadata
//! - [`analysis`]: Per-repository orchestration producing analysis records
//! - [`reports`]: Text report rendering and artifact output

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod analysis;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod facts;

#[doc(hidden)]
pub mod reports;

#[doc(hidden)]
pub mod signals;

pub use crate::commands::{Host, run};
