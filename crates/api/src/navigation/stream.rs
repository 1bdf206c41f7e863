use std::sync::Arc;

use futures::stream::{self, Stream};
use jamboree_core::navigation::{setup_event_listener, NavTarget, NavigationBus, Navigator};
use tokio::sync::mpsc;

/// Navigator that forwards every transition into a channel.
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<NavTarget>,
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, target: &NavTarget) {
        let _ = self.tx.send(target.clone());
    }
}

/// Stream of navigation targets produced by a listener on `bus`.
///
/// The listener lives exactly as long as the stream: dropping the stream
/// (e.g. the client disconnecting) tears it down.
pub fn navigation_targets(bus: &NavigationBus) -> impl Stream<Item = NavTarget> + Send + 'static {
    let (tx, rx) = mpsc::unbounded_channel();
    let guard = setup_event_listener(Some(bus), Arc::new(ChannelNavigator { tx }), None);

    stream::unfold((rx, guard), |(mut rx, guard)| async move {
        rx.recv().await.map(|target| (target, (rx, guard)))
    })
}
