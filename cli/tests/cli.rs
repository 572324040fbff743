use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn parses_legacy_parameters() {
    let expected = "[\n  {\n    \"ParameterKey\": \"A\",\n    \"ParameterValue\": \"1\"\n  },\n  {\n    \"ParameterKey\": \"B\",\n    \"ParameterValue\": \"x,y\"\n  }\n]";

    cargo_bin_cmd!("cfn-overrides")
        .args(["parameters", r#"A=1,B="x,y""#])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn parses_json_tags() {
    let expected = "[\n  {\n    \"Key\": \"env\",\n    \"Value\": \"prod\"\n  }\n]";

    cargo_bin_cmd!("cfn-overrides")
        .args(["tags", r#"{"env":"prod"}"#])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn compact_output_is_single_line() {
    cargo_bin_cmd!("cfn-overrides")
        .args(["parameters", "A=1", "--compact"])
        .assert()
        .success()
        .stdout(r#"[{"ParameterKey":"A","ParameterValue":"1"}]"#);
}

#[test]
fn unparseable_input_prints_null() {
    cargo_bin_cmd!("cfn-overrides")
        .args(["tags", "not structured at all ["])
        .assert()
        .success()
        .stdout("null");
}

#[test]
fn reads_from_stdin() {
    let expected = "[\n  {\n    \"ParameterKey\": \"A\",\n    \"ParameterValue\": \"1\"\n  }\n]";

    cargo_bin_cmd!("cfn-overrides")
        .args(["parameters", "-"])
        .write_stdin("A=1\n")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn parses_number_with_trailing_junk() {
    cargo_bin_cmd!("cfn-overrides")
        .args(["number", "12abc", "--compact"])
        .assert()
        .success()
        .stdout("12");
}

#[test]
fn checks_url_scheme() {
    cargo_bin_cmd!("cfn-overrides")
        .args(["url", "https://bucket.s3.amazonaws.com/t.yml", "--compact"])
        .assert()
        .success()
        .stdout("true");

    cargo_bin_cmd!("cfn-overrides")
        .args(["url", "local/t.yml", "--compact"])
        .assert()
        .success()
        .stdout("false");
}

#[test]
fn splits_capabilities_with_trimming() {
    cargo_bin_cmd!("cfn-overrides")
        .args(["capabilities", "CAPABILITY_IAM, CAPABILITY_NAMED_IAM", "--compact"])
        .assert()
        .success()
        .stdout(r#"["CAPABILITY_IAM","CAPABILITY_NAMED_IAM"]"#);
}

#[test]
fn writes_to_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("overrides.json");

    cargo_bin_cmd!("cfn-overrides")
        .args(["arns", "arn:a,arn:b", "--compact"])
        .args(["-o", output.to_str().expect("output path")])
        .assert()
        .success()
        .stdout(contains("Wrote").and(contains("overrides.json")));

    let contents = fs::read_to_string(&output).expect("read output");
    assert_eq!(contents, r#"["arn:a","arn:b"]"#);
}

#[test]
fn empty_string_input_prints_null() {
    cargo_bin_cmd!("cfn-overrides")
        .args(["string", ""])
        .assert()
        .success()
        .stdout("null");
}
