mod eventloop;
mod link;

pub use self::{
    eventloop::{request_stop, WorkerEventLoop},
    link::{LinkReceiver, WorkerLink, WorkerRequest},
};

/// Marker for state that is owned and mutated by the worker thread.
pub trait WorkerState {}
