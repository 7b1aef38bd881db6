use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{info, warn};

use crate::worker::{WorkerLink, WorkerRequest, WorkerState};

/// The loop running on the worker thread. It owns the state `S` and
/// serializes all access to it by draining one request at a time.
pub struct WorkerEventLoop<S>
where
    S: WorkerState,
{
    pub state: S,
    request_rx: Receiver<Box<dyn WorkerRequest<S>>>,
    should_stop: bool,
}

impl<S: WorkerState + Send + 'static> WorkerEventLoop<S> {
    pub fn new(request_rx: Receiver<Box<dyn WorkerRequest<S>>>, state: S) -> Self {
        info!("creating worker event loop");
        Self {
            state,
            request_rx,
            should_stop: false,
        }
    }

    /// Move the loop onto its own thread. The thread blocks until the
    /// next request arrives and exits once a stop request ran or every
    /// sender is gone.
    pub fn run(mut self) -> JoinHandle<()> {
        std::thread::spawn(move || {
            info!("worker event loop started");
            while let Ok(request) = self.request_rx.recv() {
                info!("handling request '{}'", request.describe());
                request.run_on_worker(&mut self);
                if self.should_stop {
                    info!("stopping worker event loop");
                    break;
                }
            }
        })
    }

    pub fn signal_stop(&mut self) -> bool {
        self.should_stop = true;
        true
    }
}

/// Ask the worker loop to stop and join its thread.
pub fn request_stop<S: WorkerState + Send + 'static>(
    request_tx: &Sender<Box<dyn WorkerRequest<S>>>,
    worker_thread_handle: JoinHandle<()>,
) {
    let (rx, link) = WorkerLink::new("end worker event loop", |w: &mut WorkerEventLoop<S>| {
        w.signal_stop()
    });
    info!("sending stop signal to worker event loop");
    if request_tx.send(Box::new(link)).is_ok() {
        if let Err(e) = rx.recv_timeout(Duration::from_secs(10)) {
            warn!("worker did not confirm stop after 10 seconds: {e}");
        }
    }
    match worker_thread_handle.join() {
        Ok(_) => info!("worker event loop ended"),
        Err(e) => warn!("failed to join worker thread: {e:?}"),
    }
}
