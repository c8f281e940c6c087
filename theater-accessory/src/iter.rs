//! Sync iterator over fired switch events
//!
//! The host bridge consumes trigger pulses by blocking on `next()` or
//! polling `try_recv()`; no async runtime is required on the consumer side.

use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use theater_state::SwitchEvent;

/// Blocking iterator over an accessory's switch events
pub struct SwitchEventIterator {
    rx: Arc<Mutex<mpsc::Receiver<SwitchEvent>>>,
}

impl SwitchEventIterator {
    pub(crate) fn new(rx: Arc<Mutex<mpsc::Receiver<SwitchEvent>>>) -> Self {
        Self { rx }
    }

    /// Block until a switch event fires
    ///
    /// Returns `None` once the accessory's worker has gone away.
    pub fn recv(&self) -> Option<SwitchEvent> {
        self.rx.lock().ok()?.recv().ok()
    }

    /// Take an event without blocking, if one is pending
    pub fn try_recv(&self) -> Option<SwitchEvent> {
        self.rx.lock().ok()?.try_recv().ok()
    }

    /// Block until an event fires or the timeout expires
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SwitchEvent> {
        self.rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

impl Iterator for SwitchEventIterator {
    type Item = SwitchEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

impl Clone for SwitchEventIterator {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iterator() -> (mpsc::Sender<SwitchEvent>, SwitchEventIterator) {
        let (tx, rx) = mpsc::channel();
        (tx, SwitchEventIterator::new(Arc::new(Mutex::new(rx))))
    }

    #[test]
    fn test_try_recv_empty() {
        let (_tx, iter) = iterator();
        assert!(iter.try_recv().is_none());
    }

    #[test]
    fn test_recv_timeout_expires() {
        let (_tx, iter) = iterator();
        assert!(iter.recv_timeout(Duration::from_millis(30)).is_none());
    }

    #[test]
    fn test_events_in_order() {
        let (tx, iter) = iterator();
        tx.send(SwitchEvent::Play).unwrap();
        tx.send(SwitchEvent::Stop).unwrap();
        assert_eq!(iter.recv(), Some(SwitchEvent::Play));
        assert_eq!(iter.recv(), Some(SwitchEvent::Stop));
    }

    #[test]
    fn test_recv_none_after_sender_dropped() {
        let (tx, iter) = iterator();
        drop(tx);
        assert!(iter.recv().is_none());
    }
}
