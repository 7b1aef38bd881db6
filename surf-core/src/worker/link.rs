use std::{
    marker::PhantomData,
    sync::{
        atomic::{AtomicBool, Ordering::SeqCst},
        mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError},
        Arc,
    },
};

use log::{debug, warn};

use crate::frontend::UiValue;
use crate::worker::{WorkerEventLoop, WorkerState};

/// A one-shot request sent to the worker thread. The closure runs on
/// the worker with access to its state; the result travels back over a
/// channel private to this request.
pub struct WorkerLink<T, F, S>
where
    F: Fn(&mut WorkerEventLoop<S>) -> T,
    S: WorkerState,
{
    reply_tx: Sender<T>,
    action: F,
    is_cancelled: Arc<AtomicBool>,
    description: String,
    _marker: PhantomData<S>,
}

impl<T, F, S> WorkerLink<T, F, S>
where
    F: Fn(&mut WorkerEventLoop<S>) -> T,
    S: WorkerState,
{
    pub fn new(description: &str, action: F) -> (LinkReceiver<T>, Self) {
        let (tx, rx) = channel();
        let is_cancelled = Arc::new(AtomicBool::new(false));
        let receiver = LinkReceiver {
            rx,
            is_cancelled: Arc::clone(&is_cancelled),
        };
        let link = Self {
            reply_tx: tx,
            action,
            is_cancelled,
            description: description.to_owned(),
            _marker: PhantomData,
        };
        (receiver, link)
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled.load(SeqCst)
    }
}

impl<T, F, S> WorkerLink<T, F, S>
where
    T: Clone + Send + 'static,
    F: Fn(&mut WorkerEventLoop<S>) -> T + Send + 'static,
    S: WorkerState + Send + 'static,
{
    /// Dispatch `action` to the worker and let `value` await the reply,
    /// to be picked up by its `try_update` in a later frame.
    pub fn request_ui_update(
        value: &mut UiValue<T>,
        description: &str,
        action: F,
        request_tx: &mut Sender<Box<dyn WorkerRequest<S>>>,
    ) {
        let (rx, link) = WorkerLink::new(description, action);
        value.set_recv(rx);
        request_tx
            .send(Box::new(link))
            .expect(crate::WORKER_HUNG_UP_MSG);
    }
}

pub trait WorkerRequest<S>: Send
where
    S: WorkerState,
{
    fn run_on_worker(&self, worker: &mut WorkerEventLoop<S>);
    fn describe(&self) -> &str;
}

impl<T, F, S> WorkerRequest<S> for WorkerLink<T, F, S>
where
    F: Fn(&mut WorkerEventLoop<S>) -> T + Send,
    S: WorkerState + Send,
    T: Send,
{
    fn run_on_worker(&self, worker: &mut WorkerEventLoop<S>) {
        if self.is_cancelled.load(SeqCst) {
            debug!("skipping cancelled request '{}'", self.description);
            return;
        }
        let result = (self.action)(worker);
        // The receiver may have been dropped while the action ran, so
        // check again before replying.
        if !self.is_cancelled.load(SeqCst) && self.reply_tx.send(result).is_err() {
            warn!(
                "no receiver left for reply to request '{}'",
                self.description
            );
        }
    }

    fn describe(&self) -> &str {
        &self.description
    }
}

/// Receiving end of a [`WorkerLink`]. Dropping it cancels the request.
#[derive(Debug)]
pub struct LinkReceiver<T> {
    rx: Receiver<T>,
    is_cancelled: Arc<AtomicBool>,
}

impl<T> LinkReceiver<T> {
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&self, duration: std::time::Duration) -> Result<T, RecvTimeoutError> {
        self.rx.recv_timeout(duration)
    }
}

impl<T> Drop for LinkReceiver<T> {
    fn drop(&mut self) {
        debug!("dropping link receiver, request is cancelled");
        self.is_cancelled.store(true, SeqCst);
    }
}
