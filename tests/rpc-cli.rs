use assert_cmd::Command;
use serde_json::Value;

mod stubs;

use stubs::schema::SYSTEM_SCHEMA;

fn run_json(args: &[&str]) -> Value {
    let mut cmd = Command::cargo_bin("srgen").unwrap();
    let output = cmd
        .env_remove("SRGEN_PREFIX")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn rpc_report_for_system_module() {
    let tempdir = tempfile::tempdir().unwrap();
    let schema = tempdir.path().join("ietf-system.json");
    std::fs::write(&schema, SYSTEM_SCHEMA).unwrap();

    let report = run_json(&["rpc", "--prefix", "system", schema.to_str().unwrap()]);
    let callbacks = report["callbacks"].as_array().unwrap();
    assert_eq!(callbacks.len(), 4);

    let set_datetime = &callbacks[0];
    assert_eq!(set_datetime["path"], "/ietf-system:set-current-datetime");
    assert_eq!(
        set_datetime["callback"],
        "system_subscription_rpc_set_current_datetime"
    );
    assert_eq!(
        set_datetime["path_constant"],
        "SYSTEM_SET_CURRENT_DATETIME_YANG_PATH"
    );
    assert_eq!(set_datetime["input"][0]["sr_type"], "SR_STRING_T");
    assert_eq!(set_datetime["input"][0]["struct_member"], "string_val");

    let status_output = callbacks[3]["output"].as_array().unwrap();
    let names: Vec<_> = status_output.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["name", "up", "uptime"]);
}

#[test]
fn types_report() {
    let report = run_json(&["types"]);
    assert_eq!(report["storage"]["uint8"], "uint8_t");
    assert!(report["storage"]["bits"].is_null());
    assert_eq!(report["wire"]["empty"], "SR_LEAF_EMPTY_T");
    assert!(report["struct_members"]["leafref"].is_null());
    assert_eq!(report["struct_members"].as_object().unwrap().len(), 20);
}
