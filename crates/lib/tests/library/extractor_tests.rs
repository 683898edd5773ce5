//! Resolving `use_route_relations` from real profiles.

use extractor_lib::extractor::ConfigurationExtractor;
use extractor_lib::scripting::ScriptError;

use super::common::fixture_env;

#[test]
fn car_profile_uses_route_relations() -> Result<(), ScriptError> {
  let env = fixture_env("car.lua", 1)?;
  assert!(ConfigurationExtractor::new(&env).uses_route_relations());
  Ok(())
}

#[test]
fn bicycle_profile_ignores_route_relations() -> Result<(), ScriptError> {
  let env = fixture_env("bicycle.lua", 1)?;
  assert!(!ConfigurationExtractor::new(&env).uses_route_relations());
  Ok(())
}

#[test]
fn profile_without_setting_defaults_to_false() -> Result<(), ScriptError> {
  let env = fixture_env("foot.lua", 1)?;
  let extractor = ConfigurationExtractor::new(&env);
  assert!(!extractor.uses_route_relations());
  assert_eq!(extractor.route_relations().default_value(), &false);
  Ok(())
}

#[test]
fn mistyped_setting_defaults_to_false() -> Result<(), ScriptError> {
  let env = fixture_env("mistyped.lua", 1)?;
  assert!(!ConfigurationExtractor::new(&env).uses_route_relations());
  Ok(())
}

#[test]
fn failing_query_does_not_fail_construction() -> Result<(), ScriptError> {
  let env = fixture_env("strict.lua", 2)?;
  assert!(!ConfigurationExtractor::new(&env).uses_route_relations());
  Ok(())
}

#[test]
fn construction_is_repeatable() -> Result<(), ScriptError> {
  let env = fixture_env("car.lua", 4)?;
  let first = ConfigurationExtractor::new(&env);
  let second = ConfigurationExtractor::new(&env);
  assert_eq!(first.uses_route_relations(), second.uses_route_relations());
  assert_eq!(first, second);
  Ok(())
}
