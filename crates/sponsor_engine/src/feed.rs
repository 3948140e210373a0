use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Ordered, lossless fan-out that replays the latest value to new subscribers.
///
/// Every subscriber receives every published value in publish order, starting
/// with the value that was current when it subscribed.
pub struct StateFeed<T> {
    inner: Mutex<FeedInner<T>>,
}

struct FeedInner<T> {
    latest: T,
    subscribers: Vec<UnboundedSender<T>>,
}

impl<T: Clone> StateFeed<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(FeedInner {
                latest: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    pub fn publish(&self, value: T) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        // Detached pipelines drop their receiver; forget them here.
        inner
            .subscribers
            .retain(|tx| tx.send(value.clone()).is_ok());
        inner.latest = value;
    }

    pub fn subscribe(&self) -> UnboundedReceiver<T> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(inner.latest.clone());
        inner.subscribers.push(tx);
        rx
    }
}
