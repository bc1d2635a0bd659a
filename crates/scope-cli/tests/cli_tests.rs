use pretty_assertions::assert_eq;
use scope_cli::{command, run};
use std::path::Path;

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let matches = command().try_get_matches_from(args)?;
    let mut out = Vec::new();
    run(&matches, &mut out)?;
    Ok(String::from_utf8(out)?)
}

const MOVE_SCRIPT: &str = "\
- op: add
  scope: { slice: slice-1, dataNetwork: dn-1 }
- op: add
  scope: { slice: slice-2, dataNetwork: dn-2 }
- op: update
  original: { slice: slice-1, dataNetwork: dn-1 }
  new: { slice: slice-2, dataNetwork: dn-1 }
";

#[test]
fn test_replay_prints_flat_scopes() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "edits.yaml", MOVE_SCRIPT);

    let output = run_args(&["scope-cli", "replay", &script]).unwrap();
    assert_eq!(output, "slice-2/dn-2\nslice-2/dn-1\n");
}

#[test]
fn test_replay_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "edits.yaml", MOVE_SCRIPT);

    let output = run_args(&["scope-cli", "replay", &script, "--json"]).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        report["scopes"],
        serde_json::json!([
            { "slice": "slice-2", "dataNetwork": "dn-2" },
            { "slice": "slice-2", "dataNetwork": "dn-1" },
        ])
    );
    assert_eq!(
        report["collection"],
        serde_json::json!([
            { "slice": "slice-2", "dataNetworks": [ { "dataNetwork": "dn-2" }, { "dataNetwork": "dn-1" } ] },
        ])
    );
    assert_eq!(report["rejected"], 0);
}

#[test]
fn test_replay_stops_on_rejected_edit() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(
        dir.path(),
        "edits.json",
        r#"[
            {"op": "add", "scope": {"slice": "slice-1", "dataNetwork": "dn-1"}},
            {"op": "remove", "scope": {"slice": "slice-2", "dataNetwork": "dn-1"}}
        ]"#,
    );

    let err = run_args(&["scope-cli", "replay", &script]).unwrap_err();
    assert!(format!("{err:#}").contains("edit #2"));
}

#[test]
fn test_replay_keep_going_skips_rejected_edit() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(
        dir.path(),
        "edits.json",
        r#"[
            {"op": "add", "scope": {"slice": "slice-1", "dataNetwork": "dn-1"}},
            {"op": "add", "scope": {"slice": "slice-9", "dataNetwork": "dn-1"}},
            {"op": "add", "scope": {"slice": "slice-1", "dataNetwork": "dn-2"}}
        ]"#,
    );

    let output = run_args(&["scope-cli", "replay", &script, "--keep-going"]).unwrap();
    assert_eq!(output, "slice-1/dn-1\nslice-1/dn-2\n");
}

#[test]
fn test_custom_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(
        dir.path(),
        "catalog.toml",
        "slices = [\"embb\"]\ndata_networks = [\"internet\"]\n",
    );

    let output = run_args(&["scope-cli", "--catalog", &catalog, "catalog"]).unwrap();
    assert_eq!(output, "Slices:\n  embb\nData networks:\n  internet\n");
}

#[test]
fn test_default_catalog_json() {
    let output = run_args(&["scope-cli", "catalog", "--json"]).unwrap();
    let catalog: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        catalog,
        serde_json::json!({
            "slices": ["slice-1", "slice-2"],
            "data_networks": ["dn-1", "dn-2"],
        })
    );
}

#[test]
fn test_missing_catalog_file_fails() {
    let err = run_args(&["scope-cli", "--catalog", "/nonexistent/catalog.toml", "catalog"])
        .unwrap_err();
    assert!(format!("{err:#}").contains("failed to load catalog"));
}
