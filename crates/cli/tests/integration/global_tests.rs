//! Global command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn global_prints_value_and_type() {
  let env = TestEnv::with_profile("max_speed = 130");

  env
    .extractor_cmd()
    .arg("global")
    .arg(&env.profile_path)
    .arg("max_speed")
    .assert()
    .success()
    .stdout(predicate::str::contains("max_speed = 130 (number)"));
}

#[test]
fn global_reports_nil_for_undefined() {
  let env = TestEnv::with_profile("");

  env
    .extractor_cmd()
    .arg("global")
    .arg(&env.profile_path)
    .arg("use_route_relations")
    .assert()
    .success()
    .stdout(predicate::str::contains("use_route_relations is not defined"));
}

#[test]
fn global_json_output() {
  let env = TestEnv::with_profile(r#"mode = "car""#);

  let output = env
    .extractor_cmd()
    .args(["global", "--json"])
    .arg(&env.profile_path)
    .arg("mode")
    .output()
    .expect("Failed to run extractor");

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
  assert_eq!(
    json,
    serde_json::json!({ "name": "mode", "value": { "type": "string", "value": "car" } })
  );
}

#[test]
fn global_rejects_invalid_names() {
  let env = TestEnv::with_profile("");

  env
    .extractor_cmd()
    .arg("global")
    .arg(&env.profile_path)
    .arg("os.exit()")
    .assert()
    .failure()
    .stderr(predicate::str::contains("not a valid Lua global name"));
}
