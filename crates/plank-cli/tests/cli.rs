//! End-to-end tests for the `plank` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn plank(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plank").expect("plank binary");
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn plan_prints_production_json() {
    let dir = TempDir::new().unwrap();
    let output = plank(&dir)
        .args(["plan", "--mode=production"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).expect("plan is JSON");
    assert_eq!(plan["mode"], "production");
    assert_eq!(
        plan["output"]["filenameTemplate"],
        "[name].[contenthash].bundle.js"
    );
    assert_eq!(plan["diagnostics"]["sourceMap"], "source-map");
    assert_eq!(plan["entries"].as_object().unwrap().len(), 2);
    assert_eq!(plan["postBuild"].as_array().unwrap().len(), 1);
}

#[test]
fn plan_writes_to_file() {
    let dir = TempDir::new().unwrap();
    plank(&dir)
        .args(["plan", "--mode", "development", "--out", "plan.json"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("plan.json")).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(plan["diagnostics"]["sourceMap"], "eval-source-map");
    assert!(plan["output"]["environment"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("dynamicImport")));
}

#[test]
fn plan_reads_config_from_config_dir() {
    let dir = TempDir::new().unwrap();
    let app = dir.path().join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(
        app.join("plank.toml"),
        "[output]\npublic_path = \"/assets/\"\n",
    )
    .unwrap();

    let output = plank(&dir)
        .args(["plan", "--mode=production", "--config-dir", "app"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(plan["output"]["publicPath"], "/assets/");
}

#[test]
fn unknown_mode_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    plank(&dir)
        .args(["plan", "--mode=staging", "--out", "plan.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));

    assert!(!dir.path().join("plan.json").exists());
}

#[test]
fn duplicate_entries_fail() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("plank.toml"),
        r#"
[[entries]]
name = "frontend"
source = "./a.tsx"

[[entries]]
name = "frontend"
source = "./b.tsx"
"#,
    )
    .unwrap();

    plank(&dir)
        .args(["plan", "--mode=production"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("frontend"));
}

#[test]
fn explain_reports_rules() {
    let dir = TempDir::new().unwrap();
    plank(&dir)
        .args([
            "explain",
            "--mode=development",
            "lib/style.css",
            "node_modules/react/index.js",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "lib/style.css: styles (css-loader -> style-loader)",
        ))
        .stdout(predicate::str::contains(
            "node_modules/react/index.js: passthrough",
        ));
}

#[test]
fn manifest_after_build() {
    let dir = TempDir::new().unwrap();
    let dist = dir.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("frontend.bundle.js"), "").unwrap();
    fs::write(dist.join("stats.bundle.js"), "").unwrap();

    plank(&dir)
        .args(["manifest", "--mode=development"])
        .assert()
        .success();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dist.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["frontend.js"], "/static/js/frontend.bundle.js");
    assert_eq!(manifest["stats.js"], "/static/js/stats.bundle.js");
}

#[test]
fn manifest_warns_about_stray_bundles() {
    let dir = TempDir::new().unwrap();
    let dist = dir.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    for file in ["frontend.bundle.js", "stats.bundle.js", "old-admin.bundle.js"] {
        fs::write(dist.join(file), "").unwrap();
    }

    plank(&dir)
        .args(["manifest", "--mode=development"])
        .assert()
        .success()
        .stderr(predicate::str::contains("old-admin.bundle.js"));

    assert!(dist.join("manifest.json").exists());
    assert!(!dist.join("manifest.tmp").exists());
}

#[test]
fn check_reports_missing_entry() {
    let dir = TempDir::new().unwrap();
    plank(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry 'frontend' not found"));
}
