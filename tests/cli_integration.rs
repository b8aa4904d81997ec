use assert_cmd::Command;
use predicates::prelude::*;

fn shelf(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home);
    cmd
}

fn seed_books(home: &std::path::Path) {
    shelf(home)
        .args([
            "add-book",
            "Emma",
            "--first",
            "Jane",
            "--last",
            "Austen",
            "--genre",
            "Romance",
            "--price",
            "12.0",
            "--published",
            "1815-12-23",
        ])
        .assert()
        .success();
    shelf(home)
        .args([
            "add-book",
            "Dracula",
            "--first",
            "Bram",
            "--last",
            "Stoker",
            "--genre",
            "Fiction",
            "--price",
            "9.0",
            "--published",
            "1897-05-26",
        ])
        .assert()
        .success();
}

#[test]
fn test_empty_library_lists_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicates::str::contains("No books found."));
}

#[test]
fn test_add_and_filter_books() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());

    // Unfiltered listing shows both.
    shelf(temp_dir.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicates::str::contains("Emma").and(predicates::str::contains("Dracula")));

    // Author filter is a case-insensitive substring match.
    shelf(temp_dir.path())
        .args(["books", "--author", "AUSTEN"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Emma").and(predicates::str::contains("Dracula").not()));

    // One failing constraint excludes the record despite a passing one.
    shelf(temp_dir.path())
        .args(["books", "--author", "austen", "--genre", "fiction"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No books found."));
}

#[test]
fn test_checkout_and_return_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());
    shelf(temp_dir.path())
        .args(["add-customer", "Ada", "Lovelace", "--email", "ada@example.org"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["checkout", "1", "1", "--on", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Checked out \"Emma\""));

    // The book leaves the available set.
    shelf(temp_dir.path())
        .args(["books", "--available", "true"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Emma").not());

    // A second checkout of the same book is refused.
    shelf(temp_dir.path())
        .args(["checkout", "1", "1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not available"));

    shelf(temp_dir.path())
        .args(["return", "1", "--on", "2024-01-12"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Book returned"));

    shelf(temp_dir.path())
        .args(["books", "--available", "true"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Emma"));

    // Returning twice is an error.
    shelf(temp_dir.path())
        .args(["return", "1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("already returned"));
}

#[test]
fn test_transaction_date_filters_are_exact() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());
    shelf(temp_dir.path())
        .args(["add-customer", "Ada", "Lovelace", "--email", "ada@example.org"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["checkout", "1", "1", "--on", "2024-01-05"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["transactions", "--borrowed", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicates::str::contains("book #1"));

    // A date prefix does not match; dates are never substring-matched.
    shelf(temp_dir.path())
        .args(["transactions", "--borrowed", "2024-01"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No transactions found."));
}

#[test]
fn test_stats_follow_the_filter() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());

    shelf(temp_dir.path())
        .args(["stats", "books"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 books"))
        .stdout(predicates::str::contains("Average price: 10.50"))
        .stdout(predicates::str::contains("romance"));

    shelf(temp_dir.path())
        .args(["stats", "books", "--genre", "romance"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 books"))
        .stdout(predicates::str::contains("Average price: 12.00"));
}

#[test]
fn test_transaction_stats_partition_returned_and_out() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());
    shelf(temp_dir.path())
        .args(["add-customer", "Ada", "Lovelace", "--email", "ada@example.org"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["checkout", "1", "1", "--on", "2024-01-05"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["checkout", "2", "1", "--on", "2024-01-06"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["return", "1", "--on", "2024-01-12"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["stats", "transactions"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 transactions"))
        .stdout(predicates::str::contains("returned").and(predicates::str::contains("unreturned")));
}

#[test]
fn test_edit_book_keeps_unmentioned_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());

    shelf(temp_dir.path())
        .args(["edit-book", "1", "--title", "Persuasion"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Book updated"));

    // Author survived the edit; filtering on it still finds the book.
    shelf(temp_dir.path())
        .args(["books", "--author", "austen"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Persuasion"));
}

#[test]
fn test_remove_book() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());

    shelf(temp_dir.path())
        .args(["remove-book", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Book removed"));

    shelf(temp_dir.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicates::str::contains("Dracula").not());

    shelf(temp_dir.path())
        .args(["remove-book", "2"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Book not found"));
}

#[test]
fn test_data_dir_flag_overrides_home() {
    let home = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    seed_books(home.path());

    // Pointed elsewhere, the library is empty.
    shelf(home.path())
        .args(["--data-dir", other.path().to_str().unwrap(), "books"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No books found."));
}

#[test]
fn test_backup_writes_archive() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_books(temp_dir.path());

    let dest = temp_dir.path().join("backup.tar.gz");
    shelf(temp_dir.path())
        .args(["backup", dest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Backed up to"));

    assert!(dest.exists());
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["config", "line-width", "80"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["config", "line-width"])
        .assert()
        .success()
        .stdout(predicates::str::contains("80"));

    shelf(temp_dir.path())
        .args(["config", "page-size"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown config key"));
}
