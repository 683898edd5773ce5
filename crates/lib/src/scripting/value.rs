use std::fmt;

use mlua::prelude::*;
use serde::Serialize;

/// A value returned by a script query, tagged by its Lua type.
///
/// Native code never coerces a Lua value implicitly: callers match on the
/// variant and decide what a mismatch means for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ScriptValue {
  Nil,
  Boolean(bool),
  Integer(i64),
  Number(f64),
  String(String),
  /// Any value native code cannot inspect (tables, functions, userdata...),
  /// carrying the Lua type name.
  Other(&'static str),
}

impl ScriptValue {
  /// Lua type name of the value, as `type()` would report it.
  pub fn type_name(&self) -> &'static str {
    match self {
      ScriptValue::Nil => "nil",
      ScriptValue::Boolean(_) => "boolean",
      ScriptValue::Integer(_) | ScriptValue::Number(_) => "number",
      ScriptValue::String(_) => "string",
      ScriptValue::Other(name) => name,
    }
  }

  pub fn is_nil(&self) -> bool {
    matches!(self, ScriptValue::Nil)
  }
}

impl From<LuaValue> for ScriptValue {
  fn from(value: LuaValue) -> Self {
    match value {
      LuaValue::Nil => ScriptValue::Nil,
      LuaValue::Boolean(b) => ScriptValue::Boolean(b),
      LuaValue::Integer(i) => ScriptValue::Integer(i),
      LuaValue::Number(n) => ScriptValue::Number(n),
      LuaValue::String(s) => ScriptValue::String(s.to_string_lossy().into()),
      other => ScriptValue::Other(other.type_name()),
    }
  }
}

impl fmt::Display for ScriptValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ScriptValue::Nil => write!(f, "nil"),
      ScriptValue::Boolean(b) => write!(f, "{}", b),
      ScriptValue::Integer(i) => write!(f, "{}", i),
      ScriptValue::Number(n) => write!(f, "{}", n),
      ScriptValue::String(s) => write!(f, "{:?}", s),
      ScriptValue::Other(name) => write!(f, "<{}>", name),
    }
  }
}
