//! End-to-end tests for the gbill binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn gbill(&self) -> Command {
        let mut cmd = Command::cargo_bin("gbill").unwrap();
        cmd.env("GBILL_CONFIG_DIR", self.dir.path().join("config"));
        cmd
    }

    fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("bills.json")
    }

    fn init(&self) -> &Self {
        self.gbill()
            .args(["init", "--db-path"])
            .arg(self.db_path())
            .assert()
            .success();
        self
    }

    fn add(&self, participants: &str, payer: &str, amount: &str) -> &Self {
        self.gbill()
            .args(["add", "-p", participants, "--payer", payer, "-a", amount])
            .assert()
            .success();
        self
    }
}

#[test]
fn version_flag() {
    Env::new()
        .gbill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gbill"));
}

#[test]
fn commands_fail_before_init() {
    Env::new()
        .gbill()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gbill init"));
}

#[test]
fn init_creates_empty_ledger() {
    let env = Env::new();
    env.init();

    assert_eq!(std::fs::read_to_string(env.db_path()).unwrap(), "[]");
    env.gbill()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no bills"));
}

#[test]
fn init_replaces_json_that_is_not_a_ledger() {
    let env = Env::new();
    std::fs::write(env.db_path(), "{}").unwrap();
    env.init();

    assert_eq!(std::fs::read_to_string(env.db_path()).unwrap(), "[]");
    env.gbill().arg("list").assert().success();
}

#[test]
fn add_then_list() {
    let env = Env::new();
    env.init().add("bo,ann", "pat", "90");

    env.gbill()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("$90.00"))
        .stdout(predicate::str::contains("Ann, Bo"))
        .stdout(predicate::str::contains("Pat"));

    let contents = std::fs::read_to_string(env.db_path()).unwrap();
    assert!(contents.contains("\"Participant\""));
    assert!(contents.contains("\"Payer\": \"Pat\""));
}

#[test]
fn calculate_splits_evenly() {
    let env = Env::new();
    env.init().add("A,B", "P", "90");

    env.gbill()
        .arg("calculate")
        .assert()
        .success()
        .stdout(predicate::str::contains("A"))
        .stdout(predicate::str::contains("$30.00"))
        .stdout(predicate::str::contains("P").not());
}

#[test]
fn edit_amount_and_out_of_range() {
    let env = Env::new();
    env.init().add("ann", "pat", "10");

    env.gbill()
        .args(["edit", "1", "--amount", "25.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$25.50"));

    let before = std::fs::read_to_string(env.db_path()).unwrap();
    env.gbill()
        .args(["edit", "2", "--amount", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Bill not found: #2"));
    assert_eq!(std::fs::read_to_string(env.db_path()).unwrap(), before);
}

#[test]
fn edit_needs_a_field() {
    let env = Env::new();
    env.init().add("ann", "pat", "10");

    env.gbill()
        .args(["edit", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nothing to edit"));
}

#[test]
fn edit_with_a_bad_field_saves_nothing() {
    let env = Env::new();
    env.init().add("ann", "pat", "10");
    let before = std::fs::read_to_string(env.db_path()).unwrap();

    env.gbill()
        .args(["edit", "1", "--amount", "99", "--payer", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Payer name cannot be empty"));

    assert_eq!(std::fs::read_to_string(env.db_path()).unwrap(), before);
}

#[test]
fn edit_several_fields() {
    let env = Env::new();
    env.init().add("ann", "pat", "10");

    env.gbill()
        .args(["edit", "1", "--amount", "12", "--payer", "bo", "-p", "cy,ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$12.00"))
        .stdout(predicate::str::contains("It is now Bo"))
        .stdout(predicate::str::contains("Ann, Cy"));
}

#[test]
fn negative_amount_rejected() {
    let env = Env::new();
    env.init();

    env.gbill()
        .args(["add", "-p", "ann", "--payer", "pat", "-a", "-3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn remove_requires_force() {
    let env = Env::new();
    env.init().add("ann", "pat", "10").add("bo", "pat", "20");

    env.gbill()
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    env.gbill()
        .args(["remove", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was removed"));

    env.gbill()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("$20.00"))
        .stdout(predicate::str::contains("$10.00").not());

    env.gbill()
        .args(["remove", "5", "--force"])
        .assert()
        .code(1);
}

#[test]
fn clear_empties_ledger() {
    let env = Env::new();
    env.init().add("ann", "pat", "10");

    env.gbill().args(["clear", "--force"]).assert().success();

    assert_eq!(std::fs::read_to_string(env.db_path()).unwrap(), "[]");
}

#[test]
fn import_and_export_csv() {
    let env = Env::new();
    env.init();

    let csv_path = env.dir.path().join("bills.csv");
    std::fs::write(&csv_path, "participants,payer,amount\nann;bo,pat,90\ncy,ann,10\n").unwrap();

    env.gbill()
        .args(["add", "--path"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 bill(s)"));

    env.gbill()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("1,Ann;Bo,Pat,90\n"))
        .stdout(predicate::str::contains("2,Cy,Ann,10\n"));
}

#[test]
fn log_records_changes() {
    let env = Env::new();
    env.init().add("ann", "pat", "10");
    env.gbill().args(["clear", "--force"]).assert().success();

    env.gbill()
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE bill #1"))
        .stdout(predicate::str::contains("CLEAR"));
}
