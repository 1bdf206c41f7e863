//! Navigation targets and the in-process navigation intent channel.
//!
//! A profile page that lists someone else's events does not render events
//! itself: it publishes an [`NavigationIntent::OpenEvent`] on the
//! [`NavigationBus`], and whichever listener owns the main page turns that
//! into a navigation to `/?event={id}`. The chrome stays mounted because the
//! two views only share the bus, not each other.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::types::DbId;

/// Root route that hosts the screen switcher.
pub const ROOT_PATH: &str = "/";
/// Query parameter naming the event to open on the root route.
pub const EVENT_QUERY_PARAM: &str = "event";

const DEFAULT_CAPACITY: usize = 64;

// ---------------------------------------------------------------------------
// NavTarget
// ---------------------------------------------------------------------------

/// A route transition: a path plus ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTarget {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl NavTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Render as a relative URL, e.g. `/?event=...`.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// Full route transition to the root page with the given event open.
pub fn navigate_to_event(event_id: DbId) -> NavTarget {
    NavTarget::new(ROOT_PATH).with_query(EVENT_QUERY_PARAM, event_id.to_string())
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// A typed request to move the viewer somewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationIntent {
    OpenEvent {
        #[serde(rename = "eventId")]
        event_id: DbId,
    },
}

/// Performs route transitions on behalf of a listener.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &NavTarget);
}

/// Fan-out channel for [`NavigationIntent`]s, shared via `Arc`.
pub struct NavigationBus {
    sender: broadcast::Sender<NavigationIntent>,
}

impl NavigationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to every current listener. Dropped silently if there are none.
    pub fn publish(&self, intent: NavigationIntent) {
        let _ = self.sender.send(intent);
    }

    /// Shorthand for publishing [`NavigationIntent::OpenEvent`].
    pub fn open_event(&self, event_id: DbId) {
        self.publish(NavigationIntent::OpenEvent { event_id });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavigationIntent> {
        self.sender.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NavigationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Callback run after the navigation for an `OpenEvent` intent.
pub type OpenEventCallback = Box<dyn Fn(DbId) + Send + Sync>;

/// Keeps a listener alive. Dropping it or calling [`teardown`](Self::teardown)
/// removes the listener.
#[derive(Debug, Default)]
pub struct ListenerGuard {
    handle: Option<JoinHandle<()>>,
}

impl ListenerGuard {
    /// A guard that owns nothing; tearing it down does nothing.
    pub fn noop() -> Self {
        Self { handle: None }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn teardown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Listen for `OpenEvent` intents: navigate to the event, then run `callback`.
///
/// Returns a no-op guard when there is no bus or no async runtime to host
/// the listener.
pub fn setup_event_listener(
    bus: Option<&NavigationBus>,
    navigator: Arc<dyn Navigator>,
    callback: Option<OpenEventCallback>,
) -> ListenerGuard {
    let Some(bus) = bus else {
        return ListenerGuard::noop();
    };
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        return ListenerGuard::noop();
    };

    let mut rx = bus.subscribe();
    let handle = runtime.spawn(async move {
        loop {
            match rx.recv().await {
                Ok(NavigationIntent::OpenEvent { event_id }) => {
                    let target = navigate_to_event(event_id);
                    tracing::debug!(%event_id, href = %target.href(), "Opening event");
                    navigator.navigate(&target);
                    if let Some(cb) = &callback {
                        cb(event_id);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Navigation listener lagged, intents dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    ListenerGuard {
        handle: Some(handle),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
