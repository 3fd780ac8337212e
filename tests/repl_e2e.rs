#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn addrbook_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("addrbook"));
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_add_then_phone() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add alice 0123456789\nphone alice\ngood bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">>>"))
        .stdout(predicate::str::contains(
            "Contact name: alice, phones: 0123456789",
        ))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_search() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add alice 0123456789\nsearch ali\nsearch qqq\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: alice, phones: 0123456789",
        ))
        .stdout(predicate::str::contains("No matching records found."));
}

#[test]
fn test_good_bye_stops_the_loop() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("good bye\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"))
        .stdout(predicate::str::contains("How can I help you?").not());
}

#[test]
fn test_contacts_persist_between_runs() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add bob 0671112233 1985-04-12\nclose\n")
        .assert()
        .success();

    let stored = fs::read_to_string(temp.path().join("addr_book.json")).unwrap();
    assert!(stored.contains("\"version\": 1"));
    assert!(stored.contains("0671112233"));
    assert!(stored.contains("1985-04-12"));

    addrbook_cmd(&temp)
        .write_stdin("show all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: bob, phones: 0671112233",
        ));
}

#[test]
fn test_errors_become_tips() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add alice\nphone nobody\nadd alice 42\nfrobnicate\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough params."))
        .stdout(predicate::str::contains("Contact not found: nobody"))
        .stdout(predicate::str::contains("Value error:"))
        .stdout(predicate::str::contains("Unknown command. Try again."));
}

#[test]
fn test_file_override() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.json");

    addrbook_cmd(&temp)
        .arg("--file")
        .arg(&custom)
        .write_stdin("add carol 0501234567\nexit\n")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp.path().join("addr_book.json").exists());
}

#[test]
fn test_config_disables_autosave() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), r#"{"autosave": false}"#).unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add dave 0501234567\nexit\n")
        .assert()
        .success();
    assert!(!temp.path().join("addr_book.json").exists());

    addrbook_cmd(&temp)
        .write_stdin("add dave 0501234567\nsave\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 records"));
    assert!(temp.path().join("addr_book.json").exists());
}

#[test]
fn test_corrupt_store_fails_startup() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("addr_book.json"), "garbage").unwrap();

    addrbook_cmd(&temp)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Corrupt store"));
}

#[test]
fn test_invalid_utf8_line_keeps_session_alive() {
    let temp = TempDir::new().unwrap();
    let mut input = b"add alice 0123456789\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"phone alice\nexit\n");

    addrbook_cmd(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command. Try again."))
        .stdout(predicate::str::contains(
            "Contact name: alice, phones: 0123456789",
        ))
        .stdout(predicate::str::contains("Good bye!"));
}
