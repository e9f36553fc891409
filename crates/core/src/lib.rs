//! Rave Core - Shared types library.
//!
//! This crate provides common types used across all Rave Collection
//! components:
//! - `storefront` - Storefront engine (cart, checkout, remote API clients)
//! - `cli` - Terminal client
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, roles, and statuses
//! - [`cart`] - The cart data model with its invariant-enforcing operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;
