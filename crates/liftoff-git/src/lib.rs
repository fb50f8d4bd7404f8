//! Liftoff Git - Git operations for the liftoff release orchestrator
//!
//! Local reads and tag creation go through git2; fetch, pull and push
//! shell out to the `git` CLI so the user's credential setup applies.

mod remote;
mod repository;
mod scm;
mod status;
mod tags;
#[cfg(test)]
mod test_support;

pub use repository::{GitRepo, Result};
