//! The `Session` type collects frontend and worker state and
//! stores/loads them to/from a JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer};
use std::path::Path;

use crate::string_error::ErrorStringExt;

const SESSION_FILE: &str = "./.surf_session.json";

#[derive(Serialize, Deserialize)]
pub struct Session<B, F> {
    pub worker_session: B,
    pub frontend_session: F,
}

impl<B, F> Session<B, F>
where
    for<'a> B: Serialize + Deserialize<'a>,
    for<'a> F: Serialize + Deserialize<'a>,
{
    pub fn new(worker_session: B, frontend_session: F) -> Self {
        Self {
            worker_session,
            frontend_session,
        }
    }

    /// Write the session as JSON, to the default session file if no
    /// path is given.
    pub fn save_json(&self, input_path: Option<&Path>) -> Result<(), String> {
        let path = input_path.unwrap_or(Path::new(SESSION_FILE));
        let file = std::fs::File::create(path).err_to_string("could not create session file")?;
        to_writer(file, &self).err_to_string("could not save session to json")?;
        log::debug!("saved session to file {:?}", path.canonicalize());
        Ok(())
    }

    pub fn load_json(input_path: Option<&Path>) -> Result<Session<B, F>, String> {
        let path = input_path.unwrap_or(Path::new(SESSION_FILE));
        let file = std::fs::File::open(path).err_to_string("could not open session file")?;
        let session = from_reader(file).err_to_string("could not load session from file")?;
        Ok(session)
    }
}
