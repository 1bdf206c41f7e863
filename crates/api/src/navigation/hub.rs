use std::collections::HashMap;
use std::sync::Arc;

use jamboree_core::navigation::NavigationBus;
use jamboree_core::types::DbId;
use tokio::sync::RwLock;

/// Registry of navigation buses keyed by viewer.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
#[derive(Default)]
pub struct NavigationHub {
    buses: RwLock<HashMap<DbId, Arc<NavigationBus>>>,
}

impl NavigationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// The viewer's bus, created on first use.
    pub async fn bus_for(&self, viewer: DbId) -> Arc<NavigationBus> {
        if let Some(bus) = self.buses.read().await.get(&viewer) {
            return Arc::clone(bus);
        }
        let mut buses = self.buses.write().await;
        Arc::clone(buses.entry(viewer).or_default())
    }

    /// Publish an `openEvent` intent to the viewer's listeners.
    ///
    /// Returns how many listeners were attached when it was published.
    pub async fn open_event(&self, viewer: DbId, event_id: DbId) -> usize {
        let bus = self.buses.read().await.get(&viewer).cloned();
        let delivered = match bus {
            Some(bus) => {
                let listeners = bus.listener_count();
                bus.open_event(event_id);
                listeners
            }
            None => 0,
        };
        tracing::debug!(viewer = %viewer, event_id = %event_id, delivered, "openEvent published");
        self.prune().await;
        delivered
    }

    /// Drop buses nobody listens to any more.
    pub async fn prune(&self) {
        self.buses
            .write()
            .await
            .retain(|_, bus| bus.listener_count() > 0 || Arc::strong_count(bus) > 1);
    }

    /// Number of viewers with a live bus.
    pub async fn viewer_count(&self) -> usize {
        self.buses.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn buses_are_per_viewer() {
        let hub = NavigationHub::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let a1 = hub.bus_for(alice).await;
        let a2 = hub.bus_for(alice).await;
        let b = hub.bus_for(bob).await;
        assert!(Arc::ptr_eq(&a1, &a2));
        assert!(!Arc::ptr_eq(&a1, &b));
    }

    #[tokio::test]
    async fn intent_reaches_only_its_viewer() {
        let hub = NavigationHub::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let mut alice_rx = hub.bus_for(alice).await.subscribe();
        let mut bob_rx = hub.bus_for(bob).await.subscribe();

        let event_id = Uuid::new_v4();
        assert_eq!(hub.open_event(alice, event_id).await, 1);

        assert!(alice_rx.try_recv().is_ok());
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unused_buses_are_pruned() {
        let hub = NavigationHub::new();
        let viewer = Uuid::new_v4();
        drop(hub.bus_for(viewer).await);
        assert_eq!(hub.viewer_count().await, 1);

        assert_eq!(hub.open_event(viewer, Uuid::new_v4()).await, 0);
        assert_eq!(hub.viewer_count().await, 0);
    }
}
