use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{ScriptError, ScriptingState};
use crate::config::ScriptingConfig;

/// Pool of per-worker scripting states, all loaded from the same profile.
///
/// The pool is created once at pipeline startup and dropped at shutdown.
/// Individual states are handed out by shared reference; `mlua::Lua` is not
/// `Send`, so the whole pool stays on the thread that built it.
pub struct ScriptingEnvironment {
  states: Vec<ScriptingState>,
  profile: Option<PathBuf>,
}

impl ScriptingEnvironment {
  /// Build one state per configured worker and load the profile into each.
  pub fn new(config: &ScriptingConfig) -> Result<Self, ScriptError> {
    let profile = config.profile();
    info!(profile = %profile.display(), workers = config.workers(), "loading scripting environment");

    let states = build_states(config.workers_nonzero(), |state| state.load_profile(profile))?;
    Ok(Self {
      states,
      profile: Some(profile.to_path_buf()),
    })
  }

  /// Same as [`ScriptingEnvironment::new`], but from an in-memory profile.
  pub fn from_source(source: &str, workers: NonZeroUsize) -> Result<Self, ScriptError> {
    let states = build_states(workers, |state| state.load_source(source, "profile"))?;
    Ok(Self { states, profile: None })
  }

  /// Borrow the state owned by worker `index`.
  pub fn state_for_worker(&self, index: usize) -> Result<&ScriptingState, ScriptError> {
    self.states.get(index).ok_or(ScriptError::WorkerOutOfRange {
      index,
      workers: self.states.len(),
    })
  }

  pub fn workers(&self) -> usize {
    self.states.len()
  }

  /// Path of the profile the states were loaded from, if it came from disk.
  pub fn profile_path(&self) -> Option<&Path> {
    self.profile.as_deref()
  }
}

fn build_states<F>(workers: NonZeroUsize, load: F) -> Result<Vec<ScriptingState>, ScriptError>
where
  F: Fn(&ScriptingState) -> Result<(), ScriptError>,
{
  (0..workers.get())
    .map(|worker| {
      let state = ScriptingState::new(worker)?;
      load(&state)?;
      debug!(worker, "scripting state ready");
      Ok(state)
    })
    .collect()
}
