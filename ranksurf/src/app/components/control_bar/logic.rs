use std::path::Path;

use surf_core::worker::{WorkerEventLoop, WorkerLink};

use crate::WorkerAppState;

impl super::ControlBar {
    pub fn try_update(&mut self) -> bool {
        self.suggestions.try_update() || self.db_info.try_update()
    }

    /// Whether no reply from the worker is outstanding.
    pub fn is_idle(&self) -> bool {
        self.suggestions.is_up_to_date() && self.db_info.is_up_to_date()
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Point the worker at `path` and reload the database. The status
    /// label switches back to "loading" until the reply lands.
    pub fn set_database_path(&mut self, path: &Path) {
        self.database_path = path.to_owned();
        let new_path = path.to_owned();
        WorkerLink::request_ui_update(
            &mut self.db_info,
            "reload name database",
            move |w: &mut WorkerEventLoop<WorkerAppState>| {
                w.state.set_database_path(&new_path);
                w.state.load_database()
            },
            &mut self.request_tx,
        );
    }

    pub(super) fn query_suggestions(&mut self) {
        let query = self.name_input.to_owned();
        WorkerLink::request_ui_update(
            &mut self.suggestions,
            "match names against query",
            move |w: &mut WorkerEventLoop<WorkerAppState>| w.state.match_names(&query),
            &mut self.request_tx,
        );
    }
}
