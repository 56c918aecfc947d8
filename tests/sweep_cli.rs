use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

struct TestStore {
    _dir: tempfile::TempDir,
    db_file: PathBuf,
    settings_file: PathBuf,
}

impl TestStore {
    fn new(records: &[(&str, Value)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_file = dir.path().join("store.json");
        let settings_file = dir.path().join("settings.json");

        let map: BTreeMap<&str, &Value> = records.iter().map(|(k, v)| (*k, v)).collect();
        fs::write(&db_file, serde_json::to_string_pretty(&map).unwrap()).unwrap();
        fs::write(
            &settings_file,
            json!({ "db_file": db_file }).to_string(),
        )
        .unwrap();

        Self {
            _dir: dir,
            db_file,
            settings_file,
        }
    }

    fn read(&self) -> BTreeMap<String, Value> {
        serde_json::from_str(&fs::read_to_string(&self.db_file).unwrap()).unwrap()
    }
}

fn padsweep(settings: &Path) -> Command {
    let mut cmd = Command::cargo_bin("padsweep").unwrap();
    cmd.arg("-s").arg(settings);
    cmd
}

fn orphan_records() -> Vec<(&'static str, Value)> {
    vec![
        ("mypads:conf:allowEtherPads", json!(false)),
        ("pad:X", json!({"atext": "text"})),
        ("pad:X:revs:1", json!({"changeset": "Z:1"})),
        ("pad:X:revs:2", json!({"changeset": "Z:2"})),
        ("pad:X:chat:1", json!({"text": "hi"})),
        ("pad2readonly:X", json!("R")),
        ("readonly2pad:R", json!("X")),
    ]
}

#[test]
fn orphans_cascade_deletes_every_dependent_record() {
    let store = TestStore::new(&orphan_records());

    padsweep(&store.settings_file)
        .arg("orphans")
        .assert()
        .success()
        .stdout(predicate::str::contains("Orphaned pad X"));

    let left = store.read();
    assert_eq!(
        left.keys().collect::<Vec<_>>(),
        vec!["mypads:conf:allowEtherPads"]
    );
}

#[test]
fn orphans_leave_claimed_pads_alone() {
    let mut records = orphan_records();
    records.push(("mypads:pad:X", json!({"name": "X"})));
    let store = TestStore::new(&records);

    padsweep(&store.settings_file).arg("orphans").assert().success();

    assert_eq!(store.read().len(), 8);
}

#[test]
fn orphans_refuse_when_anonymous_pads_are_allowed() {
    let mut records = orphan_records();
    records[0] = ("mypads:conf:allowEtherPads", json!(true));
    let store = TestStore::new(&records);

    padsweep(&store.settings_file)
        .arg("orphans")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("allowEtherPads"));

    // Nothing was deleted.
    assert_eq!(store.read().len(), 7);
}

#[test]
fn orphans_dryrun_reports_without_deleting() {
    let store = TestStore::new(&orphan_records());

    padsweep(&store.settings_file)
        .arg("orphans")
        .arg("--dryrun")
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert_eq!(store.read().len(), 7);
}

#[test]
fn ghosts_rewrite_groups_with_dangling_references() {
    let store = TestStore::new(&[
        ("mypads:group:g1", json!({"name": "g1", "pads": ["A", "B", "C"]})),
        ("mypads:pad:B", json!({"name": "B"})),
    ]);

    padsweep(&store.settings_file)
        .arg("ghosts")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 dangling"));

    let left = store.read();
    assert_eq!(left["mypads:group:g1"]["pads"], json!(["B"]));
}

#[test]
fn queue_oneshot_consumes_jobs_and_markers() {
    let mut records = orphan_records();
    records.remove(0); // the queue needs no config gate
    records.push(("mypads:jobqueue:deletePad:X", json!(1)));
    let store = TestStore::new(&records);

    padsweep(&store.settings_file)
        .arg("queue")
        .arg("--oneshot")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted pad X"));

    assert!(store.read().is_empty());
}

#[test]
fn queue_oneshot_on_empty_queue_exits_zero() {
    let store = TestStore::new(&[("pad:untouched", json!({"atext": "x"}))]);

    padsweep(&store.settings_file)
        .arg("queue")
        .arg("--oneshot")
        .assert()
        .success();

    assert_eq!(store.read().len(), 1);
}

#[test]
fn queue_quiet_suppresses_progress() {
    let mut records = orphan_records();
    records.remove(0);
    records.push(("mypads:jobqueue:deletePad:X", json!(1)));
    let store = TestStore::new(&records);

    padsweep(&store.settings_file)
        .arg("queue")
        .arg("--oneshot")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_settings_file_fails_before_touching_anything() {
    Command::cargo_bin("padsweep")
        .unwrap()
        .arg("-s")
        .arg("/nonexistent/settings.json")
        .arg("ghosts")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Settings error"));
}
