use std::{path::PathBuf, sync::mpsc::TryRecvError, thread::JoinHandle};

use derive_new::new;
use ranks_db::RankRecord;
use surf_core::{
    event::{AppEvent, EventState},
    worker::{LinkReceiver, WorkerEventLoop, WorkerLink},
    WORKER_HUNG_UP_MSG,
};

use crate::WorkerAppState;

use super::{
    storage::{load_json, save_json},
    EguiApp,
};

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
pub struct EventQueue<App> {
    /// Stores events for later processing.
    queue: Vec<Box<dyn AppEvent<App = App>>>,
    /// Temporarily stores events that have not yet finished running.
    tmp_backlog: Vec<Box<dyn AppEvent<App = App>>>,
}

impl<App> EventQueue<App> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            tmp_backlog: Vec::new(),
        }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = App>>) {
        self.queue.push(event);
    }

    pub fn discard_events(&mut self) {
        self.queue.drain(..);
        self.tmp_backlog.drain(..);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.tmp_backlog.is_empty()
    }
}

impl EguiApp {
    pub fn run_events(&mut self) {
        // Fully drain all queued events.
        while let Some(mut event) = self.event_queue.queue.pop() {
            match event.apply(self) {
                Ok(EventState::Finished) => {
                    self.request_redraw();
                }
                Ok(EventState::Busy) => {
                    // Add busy event to the backlog.
                    self.event_queue.tmp_backlog.push(event);
                }
                Err(err) => {
                    log::error!("event failed: {:?}", err)
                }
            }
        }

        // Putting the backlog back in the queue by swapping the
        // vectors.
        std::mem::swap(
            &mut self.event_queue.queue,
            &mut self.event_queue.tmp_backlog,
        );
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Look up a name on the worker and add its trend to the graph.
pub struct GraphRequested {
    name: String,
    pending: Option<LinkReceiver<Option<RankRecord>>>,
}

impl GraphRequested {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            pending: None,
        }
    }
}

/// Remove every trend line from the graph.
#[derive(new)]
pub struct ClearRequested {}

/// Handles both, saving and loading the session, depending on whether
/// `should_save` is true or false.
#[derive(new)]
pub struct SessionIoRequested {
    should_save: bool,
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

/// Point the worker at a new database file and reload it.
#[derive(new)]
pub struct OpenDatabaseRequested {
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for GraphRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if self.name.is_empty() {
            return Ok(EventState::Finished);
        }

        let rx = match self.pending.take() {
            Some(rx) => rx,
            None => {
                let name = self.name.clone();
                let (rx, link) = WorkerLink::new(
                    &format!("look up name '{}'", self.name),
                    move |w: &mut WorkerEventLoop<WorkerAppState>| w.state.find_record(&name),
                );
                app.request_tx
                    .send(Box::new(link))
                    .expect(WORKER_HUNG_UP_MSG);
                rx
            }
        };

        match rx.try_recv() {
            Ok(Some(record)) => {
                app.graph.add_entry(record);
                Ok(EventState::Finished)
            }
            Ok(None) => {
                log::warn!("name '{}' is not in the database", self.name);
                Ok(EventState::Finished)
            }
            Err(TryRecvError::Empty) => {
                self.pending = Some(rx);
                Ok(EventState::Busy)
            }
            Err(TryRecvError::Disconnected) => Err(format!(
                "lookup for '{}' was dropped by the worker",
                self.name
            )),
        }
    }
}

impl AppEvent for ClearRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.graph.clear();
        Ok(EventState::Finished)
    }
}

impl AppEvent for SessionIoRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(path)) => {
                    if self.should_save {
                        if let Err(err) = save_json(app, Some(path.as_ref())) {
                            log::error!("error while trying to save to {:?}: {:?}", &path, err)
                        };
                    } else if let Err(err) = load_json(app, Some(path.as_ref())) {
                        log::error!("error while trying to load from {:?}: {:?}", &path, err)
                    };
                }
                Ok(None) => (),
                Err(err) => {
                    let msg = if self.should_save { "save" } else { "load" };
                    log::error!("unable to {} session: {:?}", msg, err)
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }
}

impl AppEvent for OpenDatabaseRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(path)) => {
                    app.config.database_path = path.clone();
                    app.control_bar.set_database_path(&path);
                    // Entries of the previous database would be stale.
                    app.graph.clear();
                }
                Ok(None) => (),
                Err(err) => {
                    log::error!("unable to select database file: {:?}", err)
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }
}
