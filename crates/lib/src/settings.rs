//! Typed settings read from profile globals.
//!
//! A setting is resolved once: the named global is queried from a scripting
//! state, checked against the expected type and, if anything goes wrong, the
//! default is used. Absent or mistyped globals fall back silently. A failing
//! query is logged at error level and also falls back. Resolution never fails.

use std::fmt;

use tracing::error;

use crate::scripting::{ScriptError, ScriptValue, ScriptingState};

const LUA_KEYWORDS: &[&str] = &[
  "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in", "local", "nil", "not",
  "or", "repeat", "return", "then", "true", "until", "while",
];

/// A native type that a profile global can be read as.
pub trait SettingValue: Sized + Clone + fmt::Debug {
  /// Lua type the global is expected to have.
  const TYPE_NAME: &'static str;

  /// Accept `value` if it has the expected type, without coercion.
  fn from_script(value: ScriptValue) -> Option<Self>;
}

impl SettingValue for bool {
  const TYPE_NAME: &'static str = "boolean";

  fn from_script(value: ScriptValue) -> Option<Self> {
    match value {
      ScriptValue::Boolean(b) => Some(b),
      _ => None,
    }
  }
}

impl SettingValue for i64 {
  const TYPE_NAME: &'static str = "integer";

  fn from_script(value: ScriptValue) -> Option<Self> {
    match value {
      ScriptValue::Integer(i) => Some(i),
      // Lua 5.4 keeps `2.0` a float; accept it when it is integral.
      ScriptValue::Number(n) if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 => Some(n as i64),
      _ => None,
    }
  }
}

impl SettingValue for f64 {
  const TYPE_NAME: &'static str = "number";

  fn from_script(value: ScriptValue) -> Option<Self> {
    match value {
      ScriptValue::Number(n) => Some(n),
      ScriptValue::Integer(i) => Some(i as f64),
      _ => None,
    }
  }
}

impl SettingValue for String {
  const TYPE_NAME: &'static str = "string";

  fn from_script(value: ScriptValue) -> Option<Self> {
    match value {
      ScriptValue::String(s) => Some(s),
      _ => None,
    }
  }
}

/// A named, typed value read from the scripting environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionSetting<T> {
  name: &'static str,
  default: T,
  resolved: T,
}

impl<T: SettingValue> ExtractionSetting<T> {
  /// Read global `name` from `state`, falling back to `default`.
  pub fn resolve(state: &ScriptingState, name: &'static str, default: T) -> Self {
    Self::from_query(name, default, query_global(state, name))
  }

  /// Settle a query outcome into a setting. Errors are logged, never returned.
  pub fn from_query(name: &'static str, default: T, queried: Result<ScriptValue, ScriptError>) -> Self {
    let resolved = match queried {
      Ok(value) => T::from_script(value).unwrap_or_else(|| default.clone()),
      Err(err) => {
        error!("{} occured in scripting block", err.message());
        default.clone()
      }
    };

    Self {
      name,
      default,
      resolved,
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn default_value(&self) -> &T {
    &self.default
  }

  /// The value in effect.
  pub fn value(&self) -> &T {
    &self.resolved
  }

  pub fn expected_type(&self) -> &'static str {
    T::TYPE_NAME
  }
}

impl<T: SettingValue + Copy> ExtractionSetting<T> {
  pub fn get(&self) -> T {
    self.resolved
  }
}

/// Evaluate `return <name>` in `state`.
pub fn query_global(state: &ScriptingState, name: &str) -> Result<ScriptValue, ScriptError> {
  if !is_identifier(name) {
    return Err(ScriptError::InvalidGlobalName(name.to_string()));
  }
  state.execute(&format!("return {}\n", name))
}

fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let starts_ok = chars.next().is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
  starts_ok && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !LUA_KEYWORDS.contains(&name)
}
