use std::fs;
use std::path::Path;

use mlua::prelude::*;
use tracing::{debug, info};

use super::{ScriptError, ScriptValue};

/// Chunk name used for ad-hoc queries, so errors read `query:1: ...`.
const QUERY_CHUNK_NAME: &str = "=query";

/// A single embedded Lua state owned by one worker slot.
pub struct ScriptingState {
  lua: Lua,
  worker: usize,
}

impl ScriptingState {
  /// Create a fresh state for `worker` with the native helpers installed.
  pub fn new(worker: usize) -> LuaResult<Self> {
    let lua = Lua::new();
    register_print(&lua, worker)?;
    Ok(Self { lua, worker })
  }

  pub fn worker(&self) -> usize {
    self.worker
  }

  /// Run a chunk and return its first result, or `Nil` if it returned nothing.
  pub fn execute(&self, source: &str) -> Result<ScriptValue, ScriptError> {
    let values: LuaMultiValue = self.lua.load(source).set_name(QUERY_CHUNK_NAME).eval()?;
    let first = values.into_iter().next();
    Ok(first.map(ScriptValue::from).unwrap_or(ScriptValue::Nil))
  }

  /// Execute a profile file in this state.
  pub fn load_profile(&self, path: &Path) -> Result<(), ScriptError> {
    if !path.exists() {
      return Err(ScriptError::ProfileNotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    debug!(worker = self.worker, path = %path.display(), "loading profile");
    self
      .lua
      .load(source.as_str())
      .set_name(format!("@{}", path.display()))
      .exec()
      .map_err(|source| ScriptError::Profile {
        path: path.to_path_buf(),
        source,
      })
  }

  /// Execute an in-memory profile in this state. `name` is used in error messages.
  pub fn load_source(&self, source: &str, name: &str) -> Result<(), ScriptError> {
    self
      .lua
      .load(source)
      .set_name(format!("={}", name))
      .exec()
      .map_err(|source| ScriptError::Profile {
        path: name.into(),
        source,
      })
  }
}

/// Route the script's `print` into the native log instead of stdout.
fn register_print(lua: &Lua, worker: usize) -> LuaResult<()> {
  let print = lua.create_function(move |_, args: LuaMultiValue| {
    let parts = args.iter().map(|v| v.to_string()).collect::<LuaResult<Vec<_>>>()?;
    info!(target: "extractor_lib::scripting::lua", worker, "Lua print: {}", parts.join("\t"));
    Ok(())
  })?;
  lua.globals().set("print", print)
}
