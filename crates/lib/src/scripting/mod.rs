//! Embedded Lua scripting for extraction profiles.
//!
//! Operators customize extraction with a Lua profile. At startup the pipeline
//! builds a [`ScriptingEnvironment`]: one [`ScriptingState`] per worker, each
//! with the profile loaded. Native code queries those states and receives a
//! [`ScriptValue`], a closed sum type that is matched on instead of coerced.
//!
//! # Modules
//!
//! - `environment`: the per-worker pool (`ScriptingEnvironment`)
//! - `state`: a single Lua state and chunk execution (`ScriptingState`)
//! - `value`: typed query results (`ScriptValue`)

mod environment;
mod error;
mod state;
mod value;

pub use environment::ScriptingEnvironment;
pub use error::ScriptError;
pub use state::ScriptingState;
pub use value::ScriptValue;
