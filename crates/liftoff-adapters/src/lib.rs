//! Liftoff Adapters - Release-hosting adapters
//!
//! This crate provides the `ReleaseHost` implementations that publish a
//! tagged release through a hosting service's CLI.

pub mod github;

pub use github::GitHubCli;
