//! ghs - GitHub review statistics
//!
//! This library resolves teams and repositories of a GitHub organization,
//! pages through their pull requests and reviews, and summarises review
//! activity over a date window.

pub mod cli;
pub mod core;
pub mod error;
pub mod github;

pub use error::{GhsError, Result};
