use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn todoline(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todoline").expect("binary");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_works() {
    let home = TempDir::new().unwrap();
    todoline(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("todo.txt"));
}

#[test]
fn subcommand_help_works() {
    let home = TempDir::new().unwrap();
    for cmd in ["parse", "normalize", "done", "undo", "same", "new", "completions"] {
        todoline(&home).arg(cmd).arg("--help").assert().success();
    }
}

#[test]
fn normalize_keeps_canonical_line() {
    let home = TempDir::new().unwrap();
    let line = "(A) 2015-04-26 This is a test todo +project @context Due:2015-04-26";
    todoline(&home)
        .args(["normalize", line])
        .assert()
        .success()
        .stdout(format!("{line}\n"));
}

#[test]
fn done_with_date() {
    let home = TempDir::new().unwrap();
    todoline(&home)
        .args(["done", "(A) call mom +family", "--date", "2015-04-30"])
        .assert()
        .success()
        .stdout("x 2015-04-30 call mom +family\n");
}

#[test]
fn parse_json_output() {
    let home = TempDir::new().unwrap();
    todoline(&home)
        .args(["--output", "json", "parse", "text due:2015-4-6"])
        .assert()
        .success()
        .stdout(contains("\"due_date\": \"2015-04-06\""))
        .stdout(contains("\"line\": \"text due:2015-04-06\""));
}

#[test]
fn config_sets_default_output_and_due_tag() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".todoline");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.yaml"),
        "general:\n  default_output: json\nformat:\n  due_tag: lower\n",
    )
    .unwrap();

    todoline(&home)
        .args(["new", "pay rent", "--due", "2015-05-01"])
        .assert()
        .success()
        .stdout(contains("\"line\": \"pay rent due:2015-05-01\""));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".todoline");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "general: [not, a, map]\n").unwrap();

    todoline(&home)
        .args(["normalize", "text"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn invalid_priority_fails() {
    let home = TempDir::new().unwrap();
    todoline(&home)
        .args(["new", "call mom", "--priority", "a"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid priority"));
}

#[test]
fn same_reports_difference() {
    let home = TempDir::new().unwrap();
    todoline(&home)
        .args(["--output", "json", "same", "a +p", "b +p"])
        .assert()
        .success()
        .stdout(contains("\"same\": false"));
}
