//! Implementation of the `extractor global` command.

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;

use extractor_lib::consts::CANONICAL_WORKER;
use extractor_lib::scripting::ScriptValue;
use extractor_lib::settings::query_global;

use super::load_environment;

#[derive(Serialize)]
struct GlobalReport<'a> {
  name: &'a str,
  value: &'a ScriptValue,
}

/// Execute the global command.
///
/// Reads `name` from the worker the pipeline reads its settings from. Unlike
/// settings resolution, a failing query is an error here.
pub fn cmd_global(profile: &Path, name: &str, json: bool) -> Result<()> {
  let env = load_environment(profile, NonZeroUsize::new(1))?;
  let state = env
    .state_for_worker(CANONICAL_WORKER)
    .map_err(|e| anyhow!("{}", e.message()))?;
  let value = query_global(state, name)
    .map_err(|e| anyhow!("{}", e.message()))
    .with_context(|| format!("Failed to read global '{}'", name))?;

  if json {
    let report = GlobalReport { name, value: &value };
    let json = serde_json::to_string_pretty(&report)
      .context("Failed to serialize value")?;
    println!("{}", json);
    return Ok(());
  }

  if value.is_nil() {
    println!("{} is not defined", name);
    return Ok(());
  }

  let kind = format!("({})", value.type_name());
  let kind = kind.if_supports_color(Stdout, |t| t.dimmed());
  println!("{} = {} {}", name, value, kind);
  Ok(())
}
