//! Data collection from the repository hosting service
//!
//! This module talks to the GitHub REST API and turns its responses into typed values.
//!
//! # Implementation Model
//!
//! The [`hosting::Client`] issues authenticated GET requests with a fixed timeout and classifies
//! each response. The [`hosting::Provider`] builds on it to expose the four lookups needed by the
//! analyzer: the trending search, repository metadata, the issue list, and the README.
//!
//! Every lookup is wrapped in a [`ProviderResult`] which can be `Found`, `NotFound`, or `Error`.
//! Callers never see a hard failure from a lookup; they report the problem and continue with
//! an empty value so that one failing request only removes the data it was meant to provide.

pub mod hosting;
mod provider_result;
mod repo_spec;

pub use provider_result::ProviderResult;
pub use repo_spec::RepoSpec;
