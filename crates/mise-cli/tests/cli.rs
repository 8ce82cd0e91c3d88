//! Black-box tests for the `mise` binary.
//!
//! Same input => same output, and every command speaks JSON on stdout.

use std::fs;

use assert_cmd::Command;
use serde_json::{json, Value};

const CAKE: &str = "Chocolate Cake\n\nIngredients:\n- 2 cups flour\n- 1 cup sugar\n- 3 eggs\n\nInstructions:\n1. Mix dry ingredients\n2. Add eggs\n3. Bake at 350F";

fn mise() -> Command {
    let mut cmd = Command::cargo_bin("mise").expect("mise binary is built");
    cmd.env_remove("MISE_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

#[test]
fn parse_from_stdin() {
    let v = stdout_json(mise().arg("parse").write_stdin(CAKE));
    assert_eq!(v["title"], "Chocolate Cake");
    assert_eq!(v["mode"], "explicit-sections");
    assert_eq!(v["confidence"], 0.85);
    assert_eq!(v["ingredients"], json!(["2 cups flour", "1 cup sugar", "3 eggs"]));
}

#[test]
fn parse_empty_input_falls_back() {
    let v = stdout_json(mise().args(["parse", "-"]).write_stdin("   \n"));
    assert_eq!(v["mode"], "fallback");
    assert_eq!(v["title"], Value::Null);
}

#[test]
fn compile_is_deterministic_and_compact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cake.txt");
    fs::write(&input, CAKE).unwrap();

    let run = || {
        mise()
            .args(["--compact", "compile"])
            .arg(&input)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);
    let v: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["profile"], "lite");
    assert_eq!(v["x-mise"]["parse"]["mode"], "explicit-sections");
}

#[test]
fn compile_loose_json_writes_out_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("recipe.json");

    mise()
        .args(["compile", "--loose-json", "--out"])
        .arg(&out)
        .write_stdin(r#"{"name":"  Toast ","servings":2,"ingredients":["1 slice bread",""]}"#)
        .assert()
        .success();

    let v: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(v["name"], "Toast");
    assert_eq!(v["ingredients"], json!(["1 slice bread"]));
    assert_eq!(v["instructions"], json!(["(not provided)"]));
    assert!(v.get("x-mise").is_none());
    assert!(v.get("servings").is_none());
}

#[test]
fn new_then_import_bumps_revision() {
    let dir = tempfile::tempdir().unwrap();
    let doc_path = dir.path().join("doc.json");

    let doc = stdout_json(mise().arg("new"));
    assert_eq!(doc["meta"]["revision"], 0);
    assert_eq!(doc["draft"]["mode"], "raw");
    fs::write(&doc_path, serde_json::to_vec(&doc).unwrap()).unwrap();

    let next = stdout_json(
        mise()
            .args(["import", "--source", "manual", "--doc"])
            .arg(&doc_path)
            .write_stdin(CAKE),
    );
    assert_eq!(next["meta"]["revision"], 1);
    assert_eq!(next["recipe"]["name"], "Chocolate Cake");
    assert_eq!(next["draft"]["rawText"], CAKE);
    assert_eq!(next["draft"]["lastImport"]["source"], "manual");
    assert_eq!(next["draft"]["lastImport"]["mode"], "explicit-sections");
}

#[test]
fn import_ai_payload_compiles_json() {
    let dir = tempfile::tempdir().unwrap();
    let doc_path = dir.path().join("doc.json");

    let mut doc = stdout_json(mise().arg("new"));
    doc["recipe"]["stacks"] = json!({"prep": 1, "garnish": 1});
    fs::write(&doc_path, serde_json::to_vec(&doc).unwrap()).unwrap();

    let payload = r#"{"name":"Cake","servings":8,"ingredients":["2 cups flour"],"instructions":["Bake"]}"#;
    for flag in [&["--source", "ai"][..], &["--loose-json"][..]] {
        let next = stdout_json(
            mise()
                .arg("import")
                .args(flag)
                .arg("--doc")
                .arg(&doc_path)
                .write_stdin(payload),
        );
        assert_eq!(next["recipe"]["name"], "Cake");
        assert_eq!(next["recipe"]["ingredients"], json!(["2 cups flour"]));
        assert_eq!(next["draft"]["mode"], "structured");
        assert_eq!(next["draft"]["rawText"], "");
        assert_eq!(next["draft"]["lastImport"]["source"], "ai");
        assert_eq!(next["draft"]["lastImport"]["mode"], "loose-json");
    }
}

#[test]
fn validate_reports_invalid_recipe() {
    let bad = json!({
        "$schema": "https://soustack.org/schemas/recipe.schema.json",
        "profile": "lite",
        "stacks": {"prep@1": 1},
        "name": "Soup",
        "ingredients": ["water"],
        "instructions": ["boil"]
    });
    let assert = mise()
        .arg("validate")
        .write_stdin(bad.to_string())
        .assert()
        .failure();
    let v: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(v["ok"], false);
    assert!(v["error"].as_str().unwrap().contains("prep@1"));
}

#[test]
fn validate_accepts_compiled_recipe() {
    let recipe = mise()
        .args(["--compact", "compile"])
        .write_stdin("Tea\n1 tsp leaves\n1 cup water\nSteep")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v = stdout_json(mise().arg("validate").write_stdin(recipe));
    assert_eq!(v, json!({"ok": true, "mediaType": "application/vnd.soustack+json"}));
}

#[test]
fn stacks_list_and_migrate() {
    let v = stdout_json(mise().args(["stacks", "list"]));
    assert_eq!(v["stacks"].as_array().unwrap().len(), 8);

    let v = stdout_json(
        mise()
            .args(["stacks", "migrate"])
            .write_stdin(r#"{"prep@2":1,"invalid@1":1,"prep@1":1}"#),
    );
    assert_eq!(v["changed"], true);
    assert_eq!(v["stacks"], json!({"prep": 1}));
    assert_eq!(v["report"]["dropped"].as_array().unwrap().len(), 2);
}

#[test]
fn parser_config_is_validated() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("parser.json");
    fs::write(&cfg, r#"{"explicitConfidence": 2.0}"#).unwrap();

    mise()
        .args(["parse", "--parser-config"])
        .arg(&cfg)
        .write_stdin("Ingredients:")
        .assert()
        .failure();
}

#[test]
fn oversized_input_is_rejected() {
    mise()
        .args(["--max-bytes", "8", "parse"])
        .write_stdin(CAKE)
        .assert()
        .failure();
}
