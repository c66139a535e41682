//! Core functionality for ghs
//!
//! This module contains the logic around the retrieved data:
//! - Application configuration
//! - Date window handling
//! - Review statistics

pub mod config;
pub mod stats;
pub mod window;

pub use config::Config;
pub use stats::{PullRequestRecord, RepoStats};
pub use window::DateWindow;
