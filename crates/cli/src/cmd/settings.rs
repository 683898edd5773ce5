//! Implementation of the `extractor settings` command.
//!
//! Loads a profile the same way the extraction pipeline does at startup and
//! prints the settings it resolves to.

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;

use extractor_lib::consts::USE_ROUTE_RELATIONS;
use extractor_lib::extractor::ConfigurationExtractor;

use super::load_environment;

#[derive(Serialize)]
struct SettingsReport<'a> {
  profile: &'a Path,
  workers: usize,
  use_route_relations: bool,
}

/// Execute the settings command.
///
/// Fails only when the profile cannot be loaded. A profile that loads but
/// does not define the settings (or defines them badly) reports the defaults.
pub fn cmd_settings(profile: &Path, workers: Option<NonZeroUsize>, json: bool) -> Result<()> {
  let env = load_environment(profile, workers)?;
  let extractor = ConfigurationExtractor::new(&env);

  let report = SettingsReport {
    profile: env.profile_path().unwrap_or(profile),
    workers: env.workers(),
    use_route_relations: extractor.uses_route_relations(),
  };

  if json {
    let json = serde_json::to_string_pretty(&report)
      .context("Failed to serialize settings")?;
    println!("{}", json);
    return Ok(());
  }

  println!("Profile: {}", report.profile.display());
  println!("Workers: {}", report.workers);
  let value = report.use_route_relations.to_string();
  let value = if report.use_route_relations {
    value.if_supports_color(Stdout, |t| t.green()).to_string()
  } else {
    value.if_supports_color(Stdout, |t| t.yellow()).to_string()
  };
  println!("{}: {}", USE_ROUTE_RELATIONS, value);

  Ok(())
}
