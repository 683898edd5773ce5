//! Settings command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn settings_reports_route_relations_enabled() {
  let env = TestEnv::with_profile("use_route_relations = true");

  env
    .extractor_cmd()
    .arg("settings")
    .arg(&env.profile_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("use_route_relations: true"))
    .stderr(predicate::str::contains("Using route relations"));
}

#[test]
fn settings_defaults_when_unset() {
  let env = TestEnv::with_profile("-- nothing here");

  env
    .extractor_cmd()
    .arg("settings")
    .arg(&env.profile_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("use_route_relations: false"))
    .stderr(predicate::str::contains("Ignoring route relations"))
    .stderr(predicate::str::contains("ERROR").not());
}

#[test]
fn settings_survives_failing_query() {
  let env = TestEnv::with_profile(
    r#"
setmetatable(_G, {
  __index = function(_, name)
    error("undefined global '" .. name .. "'", 2)
  end,
})
"#,
  );

  env
    .extractor_cmd()
    .arg("settings")
    .arg(&env.profile_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("use_route_relations: false"))
    .stderr(predicate::str::contains("occured in scripting block"))
    .stderr(predicate::str::contains("Ignoring route relations"));
}

#[test]
fn settings_json_output() {
  let env = TestEnv::with_profile("use_route_relations = true");

  let output = env
    .extractor_cmd()
    .arg("settings")
    .arg(&env.profile_path)
    .args(["--workers", "2", "--json"])
    .output()
    .expect("Failed to run extractor");

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
  assert_eq!(json["use_route_relations"], serde_json::json!(true));
  assert_eq!(json["workers"], serde_json::json!(2));
}

#[test]
fn settings_workers_from_env() {
  let env = TestEnv::with_profile("");

  env
    .extractor_cmd()
    .env("EXTRACTOR_WORKERS", "3")
    .arg("settings")
    .arg(&env.profile_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("Workers: 3"));
}

#[test]
fn settings_verbose_logs_resolved_config() {
  let env = TestEnv::with_profile("");

  env
    .extractor_cmd()
    .args(["--verbose", "settings", "--workers", "2"])
    .arg(&env.profile_path)
    .assert()
    .success()
    .stderr(predicate::str::contains("resolved scripting config"))
    .stderr(predicate::str::contains("workers=2"));
}

#[test]
fn settings_fails_for_broken_profile() {
  let env = TestEnv::with_profile("use_route_relations = = true");

  env
    .extractor_cmd()
    .arg("settings")
    .arg(&env.profile_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load profile"));
}

#[test]
fn settings_fails_for_missing_profile() {
  let env = TestEnv::without_profile();

  env
    .extractor_cmd()
    .arg("settings")
    .arg(&env.profile_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("profile not found"));
}
