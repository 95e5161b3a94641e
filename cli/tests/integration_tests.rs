use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Scratch directory holding one database file for a test.
struct Scratch {
    dir: TempDir,
}

impl Scratch {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("app.db")
    }

    /// Runs `fastdb --db <scratch db> <args...>`.
    fn run(&self, args: &[&str]) -> Output {
        fastdb(&self.db(), args)
    }
}

fn fastdb(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fastdb"))
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("failed to run fastdb")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_ok(output: &Output) {
    assert!(
        output.status.success(),
        "fastdb failed\nstdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output)
    );
}

fn words(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[test]
fn test_create_basic_table() {
    let scratch = Scratch::new();
    let out = scratch.run(&words(
        "create --table users fields --int id --pk --ai --string name --notnull",
    ));
    assert_ok(&out);

    let text = stdout(&out);
    assert!(text.contains("CREATE TABLE users ("), "{text}");
    assert!(text.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"), "{text}");
    assert!(text.contains("name TEXT NOT NULL"), "{text}");
    assert!(text.contains(");"), "{text}");
    assert!(text.contains("Table 'users' created."), "{text}");
}

#[test]
fn test_create_with_parenthesized_fk() {
    let scratch = Scratch::new();
    assert_ok(&scratch.run(&words("create --table customers fields --int id --pk")));
    let out = scratch.run(&words(
        "create --table orders fields --int id --pk --int customer_id --fk customers(id) --ondelete cascade",
    ));
    assert_ok(&out);
    assert!(
        stdout(&out)
            .contains("FOREIGN KEY(customer_id) REFERENCES customers(id) ON DELETE cascade")
    );
}

#[test]
fn test_fk_forms_emit_the_same_reference() {
    for spec in ["clients(id)", "clients.id", "clients,id"] {
        let scratch = Scratch::new();
        let out = scratch.run(&[
            "create", "--table", "invoices", "fields", "--int", "client_id", "--fk", spec,
        ]);
        assert_ok(&out);
        assert!(
            stdout(&out).contains("FOREIGN KEY(client_id) REFERENCES clients(id)\n"),
            "spec {spec}: {}",
            stdout(&out)
        );
    }
}

#[test]
fn test_default_is_emitted_after_not_null() {
    let scratch = Scratch::new();
    let out = scratch.run(&words(
        "create --table items fields --float price --default 0.0 --notnull",
    ));
    assert_ok(&out);
    assert!(stdout(&out).contains("price REAL NOT NULL DEFAULT 0.0"));
}

#[test]
fn test_invalid_fk_action_fails_without_touching_the_database() {
    let scratch = Scratch::new();
    assert_ok(&scratch.run(&words("create --table customers fields --int id --pk")));
    let before = std::fs::read(scratch.db()).unwrap();

    let out = scratch.run(&words(
        "create --table orders fields --int id --pk --int customer_id --fk customers(id) --ondelete purge",
    ));
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("Error: invalid FK action: purge"), "{err}");
    assert!(!stdout(&out).contains("CREATE TABLE"));
    assert!(stdout(&out).contains("Usage:"), "help text follows the error");

    assert_eq!(std::fs::read(scratch.db()).unwrap(), before);
}

#[test]
fn test_translation_errors_are_reported() {
    let cases = [
        ("--integer id", "invalid field type: --integer"),
        ("--int", "missing field name after --int"),
        ("--int id --default", "missing operand after --default"),
        ("--int id --fk customers", "invalid FK format: customers"),
    ];
    for (fields, expected) in cases {
        let scratch = Scratch::new();
        let mut args = vec!["create", "--table", "t", "fields"];
        args.extend(words(fields));
        let out = scratch.run(&args);
        assert_eq!(out.status.code(), Some(1), "fields: {fields}");
        assert!(stderr(&out).contains(expected), "fields {fields}: {}", stderr(&out));
    }
}

// ---------------------------------------------------------------------------
// insert / update / delete / select
// ---------------------------------------------------------------------------

fn seeded() -> Scratch {
    let scratch = Scratch::new();
    assert_ok(&scratch.run(&words(
        "create --table users fields --int id --pk --string name --int active --default 1",
    )));
    assert_ok(&scratch.run(&words(
        "create --table accounts fields --int uid --fk users(id) --float balance",
    )));
    for values in ["1, 'ana', 1", "2, 'bo', 0", "3, NULL, 1"] {
        assert_ok(&scratch.run(&["insert", "--table", "users", "values", values]));
    }
    assert_ok(&scratch.run(&["insert", "--table", "accounts", "values", "1, 10.5"]));
    assert_ok(&scratch.run(&["insert", "--table", "accounts", "values", "2, 0.0"]));
    scratch
}

#[test]
fn test_insert_update_delete_report_rows() {
    let scratch = seeded();

    let out = scratch.run(&["insert", "--table", "users", "values", "4, 'cy', 0"]);
    assert_ok(&out);
    assert_eq!(stdout(&out), "1 row(s) inserted into 'users'.\n");

    let out = scratch.run(&["update", "--table", "users", "set", "active=1", "where", "active=0"]);
    assert_ok(&out);
    assert_eq!(stdout(&out), "2 row(s) updated in 'users'.\n");

    let out = scratch.run(&["delete", "--table", "users", "where", "id=4"]);
    assert_ok(&out);
    assert_eq!(stdout(&out), "1 row(s) deleted from 'users'.\n");
}

#[test]
fn test_select_with_join_renders_table() {
    let scratch = seeded();
    let out = scratch.run(&[
        "select",
        "id,name",
        "from",
        "users",
        "join",
        "accounts",
        "on",
        "users.id = accounts.uid",
        "where",
        "users.active=1",
    ]);
    assert_ok(&out);

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "SQL:");
    assert_eq!(
        lines[1],
        "SELECT id,name FROM users JOIN accounts ON users.id = accounts.uid WHERE users.active=1;"
    );
    assert_eq!(lines[2], format!("{:<20} | {:<20} | ", "id", "name"));
    assert_eq!(lines[3], "-".repeat(44));
    assert_eq!(lines[4], format!("{:<20} | {:<20} | ", "1", "ana"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_select_prints_null_marker() {
    let scratch = seeded();
    let out = scratch.run(&["select", "name", "from", "users", "where", "id=3"]);
    assert_ok(&out);
    assert!(stdout(&out).contains(&format!("{:<20} | ", "NULL")));
}

#[test]
fn test_select_order_and_limit() {
    let scratch = seeded();
    let out = scratch.run(&[
        "select", "id", "from", "users", "limit", "2", "order", "id DESC",
    ]);
    assert_ok(&out);
    let text = stdout(&out);
    assert!(text.contains("SELECT id FROM users ORDER BY id DESC LIMIT 2;"), "{text}");
    let rows: Vec<&str> = text.lines().skip(4).map(str::trim_end).collect();
    assert_eq!(rows, vec![format!("{:<20} |", "3"), format!("{:<20} |", "2")]);
}

#[test]
fn test_select_error_is_reported_after_sql_echo() {
    let scratch = seeded();
    let out = scratch.run(&["select", "*", "from", "missing"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("SELECT * FROM missing;"));
    assert!(stderr(&out).contains("Error: query failed"), "{}", stderr(&out));
}

#[test]
fn test_skeleton_mismatch_prints_usage() {
    let scratch = Scratch::new();
    let out = scratch.run(&["update", "--table", "users", "set", "a=1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains(
        "Error: invalid syntax. Usage: update --table <name> set <assignments> where <condition>"
    ));
}

// ---------------------------------------------------------------------------
// transactions and dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_transaction_verbs_execute() {
    let scratch = Scratch::new();
    let out = scratch.run(&["begin"]);
    assert_ok(&out);
    assert_eq!(stdout(&out), "Transaction 'begin' executed.\n");

    // Each invocation is its own connection, so nothing is open to commit.
    let out = scratch.run(&["commit"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("transaction 'commit' failed"));
}

#[test]
fn test_no_verb_prints_help_and_succeeds() {
    let scratch = Scratch::new();
    let out = scratch.run(&[]);
    assert_ok(&out);
    assert!(stdout(&out).contains("Usage:"));
    assert!(scratch.db().exists(), "the database is opened before dispatch");
}

#[test]
fn test_unknown_verb_fails() {
    let scratch = Scratch::new();
    let out = scratch.run(&["drop", "--table", "users"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: unrecognized command: drop"));
    assert!(stdout(&out).contains("Usage:"));
}

#[test]
fn test_missing_db_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_fastdb"))
        .args(["select", "*", "from", "users"])
        .output()
        .expect("failed to run fastdb");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: a database file must be given first: --db <file>"));
}

#[test]
fn test_help_token_in_verb_position_fails() {
    let scratch = Scratch::new();
    let out = scratch.run(&words("--help create --table t fields --int id"));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: unrecognized command: --help"), "{}", stderr(&out));
    assert!(stdout(&out).contains("fastdb --db <file> [command] [arguments]"));
    assert!(!stdout(&out).contains("CREATE TABLE"));

    let out = scratch.run(&["select", "name", "from", "sqlite_master"]);
    assert_ok(&out);
    assert_eq!(stdout(&out).lines().count(), 4, "no table was created");
}

#[test]
fn test_help_flag_without_db_fails() {
    for flag in ["-h", "--help"] {
        let out = Command::new(env!("CARGO_BIN_EXE_fastdb"))
            .arg(flag)
            .output()
            .expect("failed to run fastdb");
        assert_eq!(out.status.code(), Some(1), "flag {flag}");
        assert!(stderr(&out).contains("Error: a database file must be given first"));
    }
}

#[test]
fn test_second_db_flag_is_an_unknown_command() {
    let scratch = Scratch::new();
    let other = scratch.dir.path().join("other.db");
    let out = scratch.run(&["--db", other.to_str().unwrap(), "begin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: unrecognized command: --db"), "{}", stderr(&out));
    assert!(!other.exists());
}

#[test]
fn test_unopenable_database_fails() {
    let scratch = Scratch::new();
    let path = scratch.dir.path().join("no-such-dir").join("app.db");
    let out = fastdb(&path, &["begin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: cannot open database"), "{}", stderr(&out));
}
