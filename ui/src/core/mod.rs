//! Platform-agnostic state and derivations behind the storefront page.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod format;
pub mod platform;
pub mod scroll;
