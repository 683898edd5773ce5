use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the scripting environment and its states.
#[derive(Debug, Error)]
pub enum ScriptError {
  #[error(transparent)]
  Lua(#[from] mlua::Error),

  #[error("failed to read profile '{path}': {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("profile not found: {0}")]
  ProfileNotFound(PathBuf),

  #[error("failed to load profile '{path}': {source}")]
  Profile {
    path: PathBuf,
    #[source]
    source: mlua::Error,
  },

  #[error("no scripting state for worker {index} (pool has {workers})")]
  WorkerOutOfRange { index: usize, workers: usize },

  #[error("'{0}' is not a valid Lua global name")]
  InvalidGlobalName(String),
}

impl ScriptError {
  /// Error text without the stack traceback mlua attaches to runtime errors.
  pub fn message(&self) -> String {
    let full = self.to_string();
    match full.split_once("\nstack traceback:") {
      Some((message, _)) => message.to_string(),
      None => full,
    }
  }
}
