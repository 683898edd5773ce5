//! Configuration for the scripting environment.
//!
//! The profile path comes from the caller (usually the CLI). The number of
//! per-worker scripting states defaults to the available parallelism and can
//! be overridden with the `EXTRACTOR_WORKERS` environment variable.

use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::warn;

use crate::consts::WORKERS_ENV;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptingConfig {
  profile: PathBuf,
  workers: NonZeroUsize,
}

impl ScriptingConfig {
  /// Configuration for `profile` with the default worker count.
  pub fn new(profile: impl AsRef<Path>) -> Self {
    Self::with_workers(profile, default_workers())
  }

  pub fn with_workers(profile: impl AsRef<Path>, workers: NonZeroUsize) -> Self {
    Self {
      profile: normalize(profile.as_ref()),
      workers,
    }
  }

  pub fn profile(&self) -> &Path {
    &self.profile
  }

  pub fn workers(&self) -> usize {
    self.workers.get()
  }

  pub fn workers_nonzero(&self) -> NonZeroUsize {
    self.workers
  }
}

/// Number of scripting states to create when the caller does not say.
///
/// Reads `EXTRACTOR_WORKERS` first, then falls back to the machine's
/// available parallelism, then to a single worker.
pub fn default_workers() -> NonZeroUsize {
  if let Ok(raw) = env::var(WORKERS_ENV) {
    match raw.trim().parse::<NonZeroUsize>() {
      Ok(workers) => return workers,
      Err(_) => warn!(value = %raw, "ignoring invalid {}", WORKERS_ENV),
    }
  }
  thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Canonicalize existing paths so logs and errors show where the profile
/// actually lives. Missing paths are kept as given and reported on load.
fn normalize(path: &Path) -> PathBuf {
  dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
