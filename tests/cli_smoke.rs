use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn jotz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jotz").unwrap();
    cmd.env("JOTZ_HOME", home);
    cmd
}

fn seed(home: &Path, title: &str, content: &str) {
    jotz(home)
        .args(["new", "--no-editor", title, content])
        .assert()
        .success();
}

#[test]
fn create_then_list() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .args(["new", "--no-editor", "Groceries", "milk and eggs"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Note created: Groceries"));

    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Groceries"))
        .stdout(predicates::str::contains("milk and eggs"));
}

#[test]
fn newest_note_lists_first() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");
    seed(temp.path(), "Chores", "trash");

    let output = jotz(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let chores = stdout.find("Chores").expect("Chores should be listed");
    let groceries = stdout
        .find("Groceries")
        .expect("Groceries should be listed");
    assert!(
        chores < groceries,
        "the later note should come first:\n{}",
        stdout
    );
}

#[test]
fn empty_title_is_rejected() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .args(["new", "--no-editor"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Title cannot be empty"));

    // Nothing was stored
    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No notes found."));
}

#[test]
fn whitespace_title_is_rejected() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .args(["new", "--no-editor", "   ", "body"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Title cannot be empty"));
}

#[test]
fn list_search_filters_notes() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk and eggs");
    seed(temp.path(), "Chores", "take out trash");

    jotz(temp.path())
        .args(["list", "-s", "milk"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Groceries"))
        .stdout(predicates::str::contains("Chores").not());
}

#[test]
fn list_search_is_case_insensitive() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk and eggs");

    jotz(temp.path())
        .args(["list", "--search", "MILK"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Groceries"));
}

#[test]
fn list_search_without_matches_is_empty() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");

    jotz(temp.path())
        .args(["list", "-s", "zzz"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No notes found."));
}

#[test]
fn view_prints_the_note_at_an_index() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk\neggs\nbread");
    seed(temp.path(), "Chores", "trash");

    // Position 2 is the older note
    jotz(temp.path())
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Groceries"))
        .stdout(predicates::str::contains("eggs"))
        .stdout(predicates::str::contains("Chores").not());
}

#[test]
fn view_defaults_to_the_first_note() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");
    seed(temp.path(), "Chores", "trash");

    jotz(temp.path())
        .arg("view")
        .assert()
        .success()
        .stdout(predicates::str::contains("Chores"));
}

#[test]
fn view_with_a_bad_index_fails() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");

    jotz(temp.path())
        .args(["view", "9"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No note at index 9"));
}

#[test]
fn delete_asks_for_confirmation() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Keep me", "important");

    // Anything but a full "Y" cancels
    jotz(temp.path())
        .args(["rm", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."));

    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Keep me"));
}

#[test]
fn delete_goes_through_on_a_full_y() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Doomed", "bye");

    jotz(temp.path())
        .args(["rm", "1"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note deleted: Doomed"));

    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No notes found."));
}

#[test]
fn delete_yes_flag_skips_the_prompt() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Doomed", "bye");

    jotz(temp.path())
        .args(["rm", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Note deleted: Doomed"));
}

#[test]
fn path_prints_the_notes_file() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicates::str::contains("notes.json"));
}

#[test]
fn corrupt_notes_file_reads_as_empty() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("notes.json"), "definitely-not-json{").unwrap();

    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No notes found."));

    // The next write replaces the bad slot wholesale
    seed(temp.path(), "Fresh start", "");
    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Fresh start"));
}

// --- Browse mode, scripted over stdin ---

#[test]
fn browse_quits_on_eof() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .arg("browse")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicates::str::contains("jotz - 0 notes"));
}

#[test]
fn no_command_defaults_to_browse() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");

    jotz(temp.path())
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("jotz - 1 notes"))
        .stdout(predicates::str::contains("Groceries"));
}

#[test]
fn browse_filters_with_slash() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk and eggs");
    seed(temp.path(), "Chores", "take out trash");

    jotz(temp.path())
        .arg("browse")
        .write_stdin("/milk\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("jotz - 1 of 2 notes"))
        .stdout(predicates::str::contains("filter: milk"));
}

#[test]
fn browse_select_changes_the_detail_pane() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");
    seed(temp.path(), "Chores", "trash");

    let output = jotz(temp.path())
        .arg("browse")
        .write_stdin("2\nq\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    // After selecting position 2 the detail pane shows the older note
    let marker = stdout.rfind("› 2.").expect("marker should move to note 2");
    assert!(stdout[marker..].contains("Groceries"));
}

#[test]
fn browse_delete_with_confirmation() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Doomed", "bye");

    jotz(temp.path())
        .arg("browse")
        .write_stdin("d\nY\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note deleted: Doomed"))
        .stdout(predicates::str::contains("jotz - 0 notes"));
}

#[test]
fn browse_delete_cancelled_keeps_the_note() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Keep me", "important");

    jotz(temp.path())
        .arg("browse")
        .write_stdin("d\nno\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."))
        .stdout(predicates::str::contains("jotz - 1 notes"));
}

#[test]
fn browse_help_lists_the_commands() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .arg("browse")
        .write_stdin("?\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("filter notes"))
        .stdout(predicates::str::contains("discard the draft"));
}

#[test]
fn browse_unknown_command_warns() {
    let temp = tempfile::tempdir().unwrap();

    jotz(temp.path())
        .arg("browse")
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown command: x"));
}

#[cfg(unix)]
fn fake_editor(dir: &Path, script_body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-editor.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", script_body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn browse_creates_a_note_through_the_editor() {
    let temp = tempfile::tempdir().unwrap();
    let editor = fake_editor(
        temp.path(),
        r#"printf 'Browse Note\n\nmade in browse' > "$1""#,
    );

    jotz(temp.path())
        .arg("browse")
        .env("EDITOR", &editor)
        .write_stdin("n\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note created: Browse Note"));

    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Browse Note"));
}

#[cfg(unix)]
#[test]
fn browse_keeps_the_draft_when_the_title_stays_empty() {
    let temp = tempfile::tempdir().unwrap();
    // An "editor" that exits without touching the buffer
    let editor = fake_editor(temp.path(), "exit 0");

    jotz(temp.path())
        .arg("browse")
        .env("EDITOR", &editor)
        .write_stdin("n\nq\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Title cannot be empty"))
        .stdout(predicates::str::contains("Draft in progress"));

    jotz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No notes found."));
}

#[cfg(unix)]
#[test]
fn one_shot_edit_rewrites_a_note() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), "Groceries", "milk");
    let editor = fake_editor(
        temp.path(),
        r#"printf 'Groceries\n\nmilk, eggs, bread' > "$1""#,
    );

    jotz(temp.path())
        .args(["edit", "1"])
        .env("EDITOR", &editor)
        .assert()
        .success()
        .stdout(predicates::str::contains("Note updated: Groceries"));

    jotz(temp.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("milk, eggs, bread"));
}
