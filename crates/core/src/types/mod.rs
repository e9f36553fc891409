//! Core types for Rave Collection.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod role;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use role::{DashboardView, UserRole};
pub use status::OrderStatus;
