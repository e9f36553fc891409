//! The cart subsystem: persisted store, change notification bus, mutation
//! service, and checkout flow.
//!
//! Control flow for every mutation: read the full snapshot from the store,
//! apply the change in memory, write the whole snapshot back, broadcast on
//! the bus. Listeners re-read the store and recompute their derived state;
//! they never receive a payload.

mod bus;
mod checkout;
mod service;
mod store;

pub use bus::{CART_CHANGED, CartSubscription, ChangeBus, ProcessBus};
#[cfg(feature = "watch")]
pub use bus::StoreWatcher;
pub use checkout::{CheckoutFlow, CheckoutState, OrderGateway};
pub use service::CartService;
pub use store::{CartStore, JsonFileStore, MemoryStore, StoreError};
