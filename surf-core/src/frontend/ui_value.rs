use std::sync::mpsc::TryRecvError;

use log::warn;

use crate::worker::LinkReceiver;

/// A frontend value that may have a newer version in flight on the
/// worker thread. The UI renders the last known value and polls
/// `try_update` once per frame to pick up the reply.
#[derive(Debug)]
pub struct UiValue<T> {
    pending_update_rx: Option<LinkReceiver<T>>,
    value: T,
}

impl<T: Clone> Clone for UiValue<T> {
    fn clone(&self) -> Self {
        // A pending update cannot be cloned; the clone starts out
        // up to date with the last known value.
        Self {
            pending_update_rx: None,
            value: self.value.clone(),
        }
    }
}

impl<T: Default + Clone> Default for UiValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> UiValue<T> {
    pub fn new(value: T) -> Self {
        UiValue {
            pending_update_rx: None,
            value,
        }
    }

    /// Poll the pending reply, if any. Returns true if the value
    /// changed (or the pending request died and was discarded).
    pub fn try_update(&mut self) -> bool {
        let Some(rx) = &self.pending_update_rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(value) => {
                self.value = value;
                self.pending_update_rx = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                warn!("tried to receive ui value from closed channel");
                self.pending_update_rx = None;
                true
            }
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        self.pending_update_rx.is_none()
    }

    pub fn set_recv(&mut self, rx: LinkReceiver<T>) {
        self.pending_update_rx = Some(rx);
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
