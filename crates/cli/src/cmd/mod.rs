mod global;
mod settings;

pub use global::cmd_global;
pub use settings::cmd_settings;

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use extractor_lib::config::ScriptingConfig;
use extractor_lib::scripting::ScriptingEnvironment;

/// Load `profile` into a fresh scripting environment.
///
/// mlua errors are not `Send + Sync`, so they are flattened to text before
/// being handed to anyhow.
fn load_environment(profile: &Path, workers: Option<NonZeroUsize>) -> Result<ScriptingEnvironment> {
  let config = match workers {
    Some(workers) => ScriptingConfig::with_workers(profile, workers),
    None => ScriptingConfig::new(profile),
  };
  debug!(profile = %config.profile().display(), workers = config.workers(), "resolved scripting config");

  ScriptingEnvironment::new(&config)
    .map_err(|e| anyhow!("{}", e.message()))
    .with_context(|| format!("Failed to load profile: {}", profile.display()))
}
