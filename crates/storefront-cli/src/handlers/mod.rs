//! Command handlers that delegate to the `Storefront` facade.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `Storefront` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT talk to the HTTP client directly or compute totals.

pub mod add;
pub mod list;
pub mod remove;
pub mod shop;
pub mod show;
