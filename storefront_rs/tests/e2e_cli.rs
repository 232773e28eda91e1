//! End-to-end CLI tests for storefront.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command pointing to the storefront binary, run from `dir`
/// so no stray content file is picked up.
fn storefront(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("storefront");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write_content(dir: &Path, toml: &str) -> std::path::PathBuf {
    let path = dir.join("content.toml");
    fs::write(&path, toml).expect("write content file");
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("catalog"))
            .stdout(predicate::str::contains("preview"));
    }

    #[test]
    fn shows_version() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path()).assert().failure();
    }
}

// ============================================
// render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_index_html_to_dist_by_default() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Shahidaana | Premium Dry Fruits"));
        assert!(html.contains("/date.jfif"));
        assert!(!html.contains("class=\"stats-bar\""));
    }

    #[test]
    fn extended_variant_and_custom_out_dir() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .args(["render", "--variant", "extended", "--out", "site/public"])
            .assert()
            .success();

        let html = fs::read_to_string(tmp.path().join("site/public/index.html")).unwrap();
        assert!(html.contains("class=\"stats-bar\""));
        assert!(html.contains("Why Choose"));
    }

    #[test]
    fn picks_up_content_file_in_working_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".storefront")).unwrap();
        fs::write(
            tmp.path().join(".storefront/content.toml"),
            r#"
[[products]]
id = 1
name = "Saffron Threads"
price = "₹2499"
image = "/saffron.jpg"
"#,
        )
        .unwrap();

        storefront(tmp.path()).arg("render").assert().success();

        let html = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
        assert!(html.contains("Saffron Threads"));
        assert!(!html.contains("California Almonds Premium"));
    }

    #[test]
    fn broken_local_content_falls_back_to_catalog() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".storefront")).unwrap();
        fs::write(tmp.path().join(".storefront/content.toml"), "products = 5").unwrap();

        storefront(tmp.path())
            .arg("render")
            .assert()
            .success()
            .stderr(predicate::str::contains("falling back to built-in catalog"));

        let html = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
        assert!(html.contains("California Almonds Premium"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .args(["render", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[storefront] Error:"))
            .stderr(predicate::str::contains("missing.toml"));
    }

    #[test]
    fn explicit_config_is_validated() {
        let tmp = TempDir::new().unwrap();
        let path = write_content(
            tmp.path(),
            r#"
[[categories]]
id = 1
name = "Nuts"
image = "/n.jpg"

[[categories]]
id = 1
name = "Seeds"
image = "/s.jpg"
"#,
        );

        storefront(tmp.path())
            .args(["render", "--config"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid content"));
        assert!(!tmp.path().join("dist").exists());
    }
}

// ============================================
// catalog
// ============================================

mod catalog {
    use super::*;

    #[test]
    fn lists_builtin_catalog() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("Categories (4)"))
            .stdout(predicate::str::contains("Products (8)"))
            .stdout(predicate::str::contains("California Almonds Premium"));
    }

    #[test]
    fn json_output_parses() {
        let tmp = TempDir::new().unwrap();
        let output = storefront(tmp.path())
            .args(["catalog", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["categories"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["products"].as_array().map(Vec::len), Some(8));
        assert_eq!(value["products"][0]["id"], 1);
    }
}

// ============================================
// preview
// ============================================

mod preview {
    use super::*;

    #[test]
    fn rotates_through_slides_and_wraps() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .args(["preview", "--ticks", "3", "--interval-ms", "20"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[0] Mixed Dry Fruits Bowl - Premium"))
            .stdout(predicate::str::contains("tick 1: [1] Premium almonds"))
            .stdout(predicate::str::contains("tick 2: [2] Deluxe Gifts"))
            .stdout(predicate::str::contains("tick 3: [0] Mixed Dry Fruits Bowl"));
    }

    #[test]
    fn zero_ticks_shows_first_slide_only() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .args(["preview", "--ticks", "0", "--interval-ms", "20"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[0] Mixed Dry Fruits Bowl"))
            .stdout(predicate::str::contains("tick").not());
    }

    #[test]
    fn single_slide_stays_put() {
        let tmp = TempDir::new().unwrap();
        let path = write_content(
            tmp.path(),
            r#"
[hero]
slides = [{ source = "/only.jpg", alt_text = "Only" }]
"#,
        );

        storefront(tmp.path())
            .args(["preview", "--ticks", "2", "--interval-ms", "10", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("tick 1: [0] Only"))
            .stdout(predicate::str::contains("tick 2: [0] Only"));
    }

    #[test]
    fn empty_slides_do_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = write_content(tmp.path(), "[hero]\nslides = []\n");

        storefront(tmp.path())
            .args(["preview", "--interval-ms", "10", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("No slides to preview"));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let tmp = TempDir::new().unwrap();
        storefront(tmp.path())
            .args(["preview", "--interval-ms", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("greater than zero"));
    }
}
