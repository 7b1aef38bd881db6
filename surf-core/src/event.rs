/// A queued frontend action, applied to the app between frames.
///
/// Events that wait on something (a file dialog thread, a worker
/// reply) report `Busy` and are polled again on the next frame.
pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    Finished,
    Busy,
}
