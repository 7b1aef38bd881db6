#![warn(clippy::all, rust_2018_idioms)]

pub mod event;
pub mod frontend;
pub mod storage;
pub mod string_error;
pub mod worker;

/// Panic message for sends on a closed request channel. The worker
/// thread outlives the UI, so a closed channel means a bug in the
/// shutdown sequence.
pub const WORKER_HUNG_UP_MSG: &str = "worker thread hung up, cannot send request";

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use log::trace;

    use crate::frontend::UiValue;
    use crate::worker::{request_stop, WorkerEventLoop, WorkerLink, WorkerState};

    struct TestState {
        counter: usize,
    }
    impl WorkerState for TestState {}

    #[test]
    fn cancelled_requests_are_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();

        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let handle = WorkerEventLoop::new(request_rx, TestState { counter: 0 }).run();

        let tic = Instant::now();

        let (rx, link) = WorkerLink::new("test", |_: &mut WorkerEventLoop<TestState>| {
            std::thread::sleep(Duration::from_millis(1000));
        });

        // Dropping the receiver cancels the request, so the worker must
        // not run the 1 s sleep ...
        drop(rx);
        trace!("receiver dropped");
        assert!(link.is_cancelled());
        request_tx.send(Box::new(link)).unwrap();
        // (this blocks until the worker thread joined)
        request_stop(&request_tx, handle);
        let delta = (Instant::now() - tic).as_millis();
        // ... thus shutting down takes far less than the sleep duration
        assert!(delta < 500);
    }

    #[test]
    fn requests_reply_with_results() {
        let _ = env_logger::builder().is_test(true).try_init();

        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let handle = WorkerEventLoop::new(request_rx, TestState { counter: 41 }).run();

        let (rx, link) = WorkerLink::new("increment", |w: &mut WorkerEventLoop<TestState>| {
            w.state.counter += 1;
            w.state.counter
        });
        request_tx.send(Box::new(link)).unwrap();
        let result = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(result, 42);

        request_stop(&request_tx, handle);
    }

    #[test]
    fn ui_value_picks_up_the_pending_reply() {
        let _ = env_logger::builder().is_test(true).try_init();

        let (mut request_tx, request_rx) = std::sync::mpsc::channel();
        let handle = WorkerEventLoop::new(request_rx, TestState { counter: 0 }).run();

        let mut tracked = UiValue::new(0usize);
        WorkerLink::request_ui_update(
            &mut tracked,
            "fetch counter",
            |w: &mut WorkerEventLoop<TestState>| w.state.counter + 7,
            &mut request_tx,
        );
        assert!(!tracked.is_up_to_date());

        let tic = Instant::now();
        while !tracked.try_update() {
            assert!(tic.elapsed() < Duration::from_secs(1), "no reply within 1 s");
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(*tracked.value(), 7);

        request_stop(&request_tx, handle);
    }
}
