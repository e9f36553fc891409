//! Watch command: follow cart change signals until interrupted.
//!
//! Demonstrates both bus transports at once: mutations made by this
//! process arrive through the in-process broadcast, and mutations made by
//! other processes arrive through the file watcher on the store path.

#![allow(clippy::print_stdout)]

use rave_storefront::cart::StoreWatcher;
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;

/// Print the badge count and total every time the cart changes.
pub async fn run(state: &AppState) -> Result<()> {
    let cart = state.cart();
    let watcher = StoreWatcher::spawn(cart.store().path(), cart.bus().clone())
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut subscription = cart.subscribe();
    println!(
        "Watching {} - {} items, LKR {:.2}",
        cart.store().path().display(),
        cart.item_count(),
        cart.total_price()
    );

    loop {
        tokio::select! {
            changed = subscription.changed() => {
                if !changed {
                    break;
                }
                // Re-read the store and recompute; the signal has no payload.
                println!("{} items, LKR {:.2}", cart.item_count(), cart.total_price());
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    drop(watcher);
    Ok(())
}
