//! extractor-lib: profile-driven settings for the map-data extraction pipeline.
//!
//! Operators tune extraction with a Lua profile. This crate loads the profile
//! into a pool of per-worker Lua states ([`scripting::ScriptingEnvironment`])
//! and resolves the settings the pipeline needs up front
//! ([`extractor::ConfigurationExtractor`]).
//!
//! # Example
//!
//! ```no_run
//! use extractor_lib::config::ScriptingConfig;
//! use extractor_lib::extractor::ConfigurationExtractor;
//! use extractor_lib::scripting::ScriptingEnvironment;
//!
//! let config = ScriptingConfig::new("profiles/car.lua");
//! let env = ScriptingEnvironment::new(&config)?;
//! let extractor = ConfigurationExtractor::new(&env);
//! println!("route relations: {}", extractor.uses_route_relations());
//! # Ok::<(), extractor_lib::scripting::ScriptError>(())
//! ```

pub mod config;
pub mod consts;
pub mod extractor;
pub mod scripting;
pub mod settings;
