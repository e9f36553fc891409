//! Command implementations for the Rave CLI.

pub mod account;
pub mod admin;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod pos;
pub mod profile;
pub mod shop;
pub mod watch;
