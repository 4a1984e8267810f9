//! Folio Drive
//!
//! HTTP client for the cloud drive that hosts uploaded site media. The
//! contract is deliberately small: the service accepts a file and returns
//! the public URL to embed.

#![forbid(unsafe_code)]

mod client;
mod error;

pub use client::{DriveClient, DriveConfig};
pub use error::{DriveError, Result};
