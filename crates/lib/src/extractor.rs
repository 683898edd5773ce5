//! Extraction settings resolved from the profile at pipeline startup.

use tracing::info;

use crate::consts::{CANONICAL_WORKER, USE_ROUTE_RELATIONS};
use crate::scripting::ScriptingEnvironment;
use crate::settings::{ExtractionSetting, query_global};

/// Reads the profile-level switches the extraction pipeline needs before it
/// starts parsing.
///
/// Construction never fails: a broken or incomplete profile degrades to the
/// defaults, with the reason in the log. The value is read once and never
/// refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationExtractor {
  use_route_relations: ExtractionSetting<bool>,
}

impl ConfigurationExtractor {
  pub fn new(env: &ScriptingEnvironment) -> Self {
    Self {
      use_route_relations: read_use_route_relations_setting(env),
    }
  }

  /// Whether relation-level routing metadata should be honored.
  pub fn uses_route_relations(&self) -> bool {
    self.use_route_relations.get()
  }

  pub fn route_relations(&self) -> &ExtractionSetting<bool> {
    &self.use_route_relations
  }
}

fn read_use_route_relations_setting(env: &ScriptingEnvironment) -> ExtractionSetting<bool> {
  let queried = env
    .state_for_worker(CANONICAL_WORKER)
    .and_then(|state| query_global(state, USE_ROUTE_RELATIONS));
  let setting = ExtractionSetting::from_query(USE_ROUTE_RELATIONS, false, queried);

  if setting.get() {
    info!("Using route relations");
  } else {
    info!("Ignoring route relations");
  }
  setting
}
