//! Core components of the `guardian-feed` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FeedClient`] and its builder.
//! - The primary [`FeedError`] type.
//! - Logging shims and the `test-mode` fixture recorder.

/// The main client (`FeedClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FeedError`) for the crate.
pub mod error;
pub(crate) mod log;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::FeedClient`
pub use client::{FeedClient, FeedClientBuilder};
pub use error::FeedError;
