#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCatalogClient is meant to be used through the CatalogApi trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCatalogClient;

// Configuration
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

// Image helpers
pub use url::{image_url, image_url_with_fallback, placeholder_image_url};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio_test as _;
