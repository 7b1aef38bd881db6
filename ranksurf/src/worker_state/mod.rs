use std::path::{Path, PathBuf};

use ranks_db::{NameDataBase, NameMatch, RankRecord};
use surf_core::worker::WorkerState;

/// State owned by the worker thread: the database path and, once
/// loaded, the parsed database.
#[derive(Default)]
pub struct WorkerAppState {
    database_path: PathBuf,
    database: Option<NameDataBase>,
}

impl WorkerState for WorkerAppState {}

impl WorkerAppState {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            database: None,
        }
    }
}

/// Implementations of worker actions
impl WorkerAppState {
    /// (Re)load the database from the current path. On success the
    /// previous database is replaced and the entry count returned; on
    /// failure the previous database stays active.
    pub fn load_database(&mut self) -> Result<usize, String> {
        match NameDataBase::from_path(&self.database_path) {
            Ok(database) => {
                let count = database.len();
                log::info!("loaded {} names from {:?}", count, self.database_path);
                self.database = Some(database);
                Ok(count)
            }
            Err(err) => {
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    pub fn set_database_path(&mut self, new_path: &Path) {
        self.database_path = new_path.to_owned();
    }

    pub fn get_database_path(&self) -> PathBuf {
        self.database_path.clone()
    }

    /// Case-blind exact lookup, cloned out for the frontend.
    pub fn find_record(&self, name: &str) -> Option<RankRecord> {
        self.database.as_ref()?.find(name).cloned()
    }

    /// Names matching `query`, for the suggestion list.
    pub fn match_names(&self, query: &str) -> Vec<NameMatch> {
        match &self.database {
            Some(database) => database.matches(query),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_without_a_database_come_up_empty() {
        let state = WorkerAppState::new(PathBuf::from("names-data.txt"));
        assert!(state.find_record("sam").is_none());
        assert!(state.match_names("sam").is_empty());
    }

    #[test]
    fn loading_a_missing_file_keeps_the_error() {
        let mut state = WorkerAppState::new(PathBuf::from("/no/such/file"));
        let err = state.load_database().unwrap_err();
        assert!(err.contains("could not read database file"));
    }
}
