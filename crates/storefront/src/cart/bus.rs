//! Change notification for the cart.
//!
//! Every mutation broadcasts the fixed `cart-updated` signal with no
//! payload; listeners re-read the store and recompute their derived state,
//! so handling a signal is idempotent. Two transports feed the same
//! channel: the in-process broadcast used by components in this process,
//! and (with the `watch` feature) a filesystem watcher that turns another
//! process's write to the store file into the same signal.

use tokio::sync::broadcast;

/// Name of the cart change signal.
pub const CART_CHANGED: &str = "cart-updated";

const CHANNEL_CAPACITY: usize = 16;

/// Publish/subscribe handle for cart change signals.
pub trait ChangeBus {
    /// Announce that the cart changed.
    fn publish(&self);

    /// Register a listener. Dropping the subscription unsubscribes.
    fn subscribe(&self) -> CartSubscription;
}

/// In-process transport: a broadcast channel shared by every component
/// holding a clone of this bus.
#[derive(Debug, Clone)]
pub struct ProcessBus {
    tx: broadcast::Sender<()>,
}

impl ProcessBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }
}

impl Default for ProcessBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeBus for ProcessBus {
    fn publish(&self) {
        // A send error only means nobody is listening right now.
        let _ = self.tx.send(());
        tracing::debug!(event = CART_CHANGED, "cart change published");
    }

    fn subscribe(&self) -> CartSubscription {
        CartSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// A live listener registration on the bus.
#[derive(Debug)]
pub struct CartSubscription {
    rx: broadcast::Receiver<()>,
}

impl CartSubscription {
    /// Wait for the next change signal.
    ///
    /// Returns `false` once every publisher is gone. Lagged signals collapse
    /// into one: the handler re-reads the store either way, so missing
    /// intermediate signals is harmless.
    pub async fn changed(&mut self) -> bool {
        match self.rx.recv().await {
            Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => true,
            Err(broadcast::error::RecvError::Closed) => false,
        }
    }

    /// Check for a pending change signal without blocking.
    pub fn try_changed(&mut self) -> bool {
        matches!(
            self.rx.try_recv(),
            Ok(()) | Err(broadcast::error::TryRecvError::Lagged(_))
        )
    }
}

#[cfg(feature = "watch")]
mod watcher {
    use std::path::Path;

    use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

    use super::{ChangeBus, ProcessBus};

    /// Cross-process transport: forwards filesystem writes to the store
    /// file into the in-process bus, so a mutation in another process
    /// reaches the same handlers as a local one.
    ///
    /// This process's own writes surface here too; handlers are idempotent,
    /// so the duplicate signal is harmless. Keep the watcher alive for as
    /// long as signals are wanted; dropping it stops the forwarding.
    pub struct StoreWatcher {
        _watcher: RecommendedWatcher,
    }

    impl StoreWatcher {
        /// Watch `path` and publish on `bus` whenever the file is created
        /// or modified by any process.
        ///
        /// The parent directory is watched rather than the file itself, so
        /// the signal keeps firing when the file is replaced or did not
        /// exist yet.
        ///
        /// # Errors
        ///
        /// Returns `notify::Error` if the watch cannot be established.
        pub fn spawn(path: &Path, bus: ProcessBus) -> Result<Self, notify::Error> {
            let file_name = path.file_name().map(std::ffi::OsStr::to_owned);
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            std::fs::create_dir_all(&dir)?;

            let mut watcher =
                notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
                    Ok(event) => {
                        let relevant = matches!(
                            event.kind,
                            EventKind::Create(_) | EventKind::Modify(_)
                        ) && event
                            .paths
                            .iter()
                            .any(|p| p.file_name() == file_name.as_deref());
                        if relevant {
                            bus.publish();
                        }
                    }
                    Err(err) => tracing::warn!("cart file watch error: {err}"),
                })?;
            watcher.watch(&dir, RecursiveMode::NonRecursive)?;

            Ok(Self { _watcher: watcher })
        }
    }
}

#[cfg(feature = "watch")]
pub use watcher::StoreWatcher;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = ProcessBus::new();
        bus.publish();
    }

    #[test]
    fn test_subscriber_receives_publish() {
        let bus = ProcessBus::new();
        let mut sub = bus.subscribe();

        assert!(!sub.try_changed());
        bus.publish();
        assert!(sub.try_changed());
        assert!(!sub.try_changed());
    }

    #[test]
    fn test_all_subscribers_receive_each_publish() {
        let bus = ProcessBus::new();
        let mut badge = bus.subscribe();
        let mut summary = bus.subscribe();

        bus.publish();
        assert!(badge.try_changed());
        assert!(summary.try_changed());
    }

    #[test]
    fn test_dropped_subscription_unsubscribes() {
        let bus = ProcessBus::new();
        let sub = bus.subscribe();
        drop(sub);

        // No receivers left; publishing must not panic.
        bus.publish();
    }

    #[tokio::test]
    async fn test_changed_wakes_on_publish() {
        let bus = ProcessBus::new();
        let mut sub = bus.subscribe();

        let waiter = tokio::spawn(async move { sub.changed().await });
        bus.publish();
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn test_changed_ends_when_bus_dropped() {
        let bus = ProcessBus::new();
        let mut sub = bus.subscribe();
        drop(bus);

        assert!(!sub.changed().await);
    }
}
