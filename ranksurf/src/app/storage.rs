use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use surf_core::storage::Session;

use crate::EguiApp;

use super::events::GraphRequested;

// Currently not used, since the only worker state to save right now is
// the database path, which is also mirrored in the frontend (the
// control bar).
#[derive(Clone, Serialize, Deserialize)]
struct WorkerSession {}

// Serializing the graph entries is a special case: only the names are
// stored, the rank data is looked up again through the worker when the
// session is loaded.
#[derive(Serialize, Deserialize)]
struct FrontendSession {
    database_path: PathBuf,
    displayed: Vec<String>,
}

pub fn save_json(app: &EguiApp, path: Option<&Path>) -> Result<(), String> {
    let worker_session = WorkerSession {};

    let frontend_session = FrontendSession {
        database_path: app.control_bar.database_path().to_path_buf(),
        displayed: app.graph.displayed_names().map(str::to_owned).collect(),
    };

    Session::new(worker_session, frontend_session).save_json(path)
}

pub fn load_json(app: &mut EguiApp, path: Option<&Path>) -> Result<(), String> {
    let Session::<WorkerSession, FrontendSession> {
        worker_session: _,
        frontend_session,
    } = Session::load_json(path)?;

    app.config.database_path = frontend_session.database_path.clone();
    app.control_bar
        .set_database_path(&frontend_session.database_path);
    app.graph.clear();
    // Repopulate the chart through the worker, one lookup per stored
    // name. The worker runs the reload dispatched above first, so the
    // lookups hit the fresh database.
    for name in frontend_session.displayed {
        app.event_queue
            .queue_event(Box::new(GraphRequested::new(&name)));
    }
    app.request_redraw();
    Ok(())
}
