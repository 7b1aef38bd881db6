mod logic;
mod ui;

use std::path::PathBuf;

use ranks_db::NameMatch;
use surf_core::frontend::UiValue;

use crate::app::DynRequestSender;

/// The bar at the top of the chart view: name input, the Graph and
/// Clear buttons, the database status, and the live suggestion list.
pub struct ControlBar {
    name_input: String,
    suggestions: UiValue<Vec<NameMatch>>,
    /// Entry count of the active database, or the load error.
    db_info: UiValue<Result<usize, String>>,
    database_path: PathBuf,
    request_tx: DynRequestSender,
}

impl ControlBar {
    pub fn new(request_tx: DynRequestSender) -> Self {
        Self {
            name_input: String::new(),
            suggestions: Default::default(),
            db_info: UiValue::new(Err("no database loaded".to_string())),
            database_path: PathBuf::new(),
            request_tx,
        }
    }
}
