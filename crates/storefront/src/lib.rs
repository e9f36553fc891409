//! Rave Collection storefront engine.
//!
//! This crate provides the storefront functionality as a library: the
//! persisted cart with its change notification bus, the checkout flow,
//! role-gated dashboard composition, and typed clients for the remote
//! Rave REST API.
//!
//! All persistence and business rules for products, orders, users, and
//! commissions live server-side; the only state this crate owns is the
//! cart, kept in a durable local store until checkout converts it into
//! an order.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod state;
