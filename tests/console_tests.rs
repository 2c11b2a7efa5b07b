//! Tests for the interactive console
//!
//! Each test scripts a whole session through an in-memory reader and
//! inspects the transcript and the resulting registry state.

use std::io::Cursor;

use gradebook::accounts::{AccountStore, Role};
use gradebook::config::Config;
use gradebook::console::Console;
use gradebook::{Registry, Student};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

struct Fixture {
    _temp: TempDir,
    registry: Registry,
    accounts: AccountStore,
}

fn setup() -> Fixture {
    let temp = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp.path()).build();
    let registry = Registry::open(config.clone()).unwrap();
    let mut accounts = AccountStore::open(&config.accounts_path()).unwrap();
    accounts.register("prof", "pw", Role::Faculty).unwrap();
    accounts.register("kim", "pw", Role::Student).unwrap();
    Fixture {
        _temp: temp,
        registry,
        accounts,
    }
}

fn run_session(fixture: &mut Fixture, script: &str) -> String {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut console = Console::new(&fixture.registry, &mut fixture.accounts, input, Vec::new());
    console.run().unwrap();
    let (_, output) = console.into_inner();
    String::from_utf8(output).unwrap()
}

const FACULTY_LOGIN: &str = "2\nfaculty\nprof\npw\n";

// =============================================================================
// Welcome / Login Tests
// =============================================================================

#[test]
fn test_exit_from_welcome() {
    let mut fixture = setup();

    let output = run_session(&mut fixture, "3\n");

    assert!(output.contains("=== Academic Exam Result Management ==="));
    assert!(output.contains("Exiting the system. Bye!"));
}

#[test]
fn test_eof_ends_session() {
    let mut fixture = setup();

    let output = run_session(&mut fixture, "");

    assert!(output.contains("Enter your choice: "));
}

#[test]
fn test_invalid_choice_reprompts() {
    let mut fixture = setup();

    let output = run_session(&mut fixture, "7\nabc\n3\n");

    assert_eq!(output.matches("Invalid choice. Try again.").count(), 2);
    assert!(output.contains("Bye!"));
}

#[test]
fn test_register_then_login() {
    let mut fixture = setup();

    let output = run_session(
        &mut fixture,
        "1\nfaculty\nnewprof\nsecret\n2\nfaculty\nnewprof\nsecret\n8\n3\n",
    );

    assert!(output.contains("faculty newprof registered successfully."));
    assert!(output.contains("Welcome, newprof."));
    assert!(output.contains("=== Faculty Dashboard ==="));
}

#[test]
fn test_register_duplicate_username() {
    let mut fixture = setup();

    let output = run_session(&mut fixture, "1\nstudent\nkim\nother\n3\n");

    assert!(output.contains("Error: Username \"kim\" already exists"));
}

#[test]
fn test_wrong_role_login_fails() {
    let mut fixture = setup();

    let output = run_session(&mut fixture, "2\nfaculty\nkim\npw\n3\n");

    assert!(output.contains("Error: Invalid username, password, or role"));
    assert!(!output.contains("Faculty Dashboard"));
}

// =============================================================================
// Faculty Dashboard Tests
// =============================================================================

#[test]
fn test_insert_search_and_rank() {
    let mut fixture = setup();
    let script = format!(
        "{}1\n5\nAda Lovelace\n2\n90\n80\n76\n1\n3\nAlan Turing\n1\n95\n60\n3\n5\n4\n8\n3\n",
        FACULTY_LOGIN
    );

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Student with ID 5 added successfully."));
    assert!(output.contains("Student with ID 3 added successfully."));
    assert!(output.contains("Student Found:\nID: 5\nName: Ada Lovelace\nMarks: 90 80\nCGPA: 8.50"));
    assert!(output.contains("Fee Slab: First Slab\nEligible: Yes"));

    let ranking = output.split("=== Student Ranking (by CGPA Descending) ===").nth(1).unwrap();
    let turing = ranking.find("Alan Turing").unwrap();
    let ada = ranking.find("Ada Lovelace").unwrap();
    assert!(turing < ada);

    assert_eq!(fixture.registry.len(), 2);
}

#[test]
fn test_insert_invalid_record_is_reported() {
    let mut fixture = setup();
    let script = format!("{}1\n1\nR2D2\n1\n50\n80\n8\n3\n", FACULTY_LOGIN);

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Error: Invalid student name"));
    assert!(fixture.registry.is_empty());
}

#[test]
fn test_subject_count_is_bounded() {
    let mut fixture = setup();
    let script = format!("{}1\n1\nAda\n0\n11\n2\n90\n80\n80\n8\n3\n", FACULTY_LOGIN);

    let output = run_session(&mut fixture, &script);

    assert_eq!(output.matches("Please enter a number between 1 and 10.").count(), 2);
    assert!(output.contains("Student with ID 1 added successfully."));
    assert_eq!(fixture.registry.get(1).unwrap().marks(), &[90.0, 80.0]);
}

#[test]
fn test_insert_non_numeric_mark_reprompts() {
    let mut fixture = setup();
    let script = format!("{}1\n1\nAda\n1\nninety\n90\n80\n8\n3\n", FACULTY_LOGIN);

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Invalid input \"ninety\". Please try again."));
    assert_eq!(fixture.registry.get(1).unwrap().cgpa(), 9.0);
}

#[test]
fn test_duplicate_insert_is_reported() {
    let mut fixture = setup();
    fixture
        .registry
        .add(Student::new(1, "Ada", vec![50.0], 80.0).unwrap())
        .unwrap();
    let script = format!("{}1\n1\nBob\n1\n90\n80\n8\n3\n", FACULTY_LOGIN);

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Error: Student with ID 1 already exists"));
    assert_eq!(fixture.registry.get(1).unwrap().name(), "Ada");
}

#[test]
fn test_delete_and_list() {
    let mut fixture = setup();
    for id in [1, 2] {
        fixture
            .registry
            .add(Student::new(id, "Someone", vec![70.0], 80.0).unwrap())
            .unwrap();
    }
    let script = format!("{}2\n1\n2\n9\n5\n8\n3\n", FACULTY_LOGIN);

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Student with ID 1 deleted successfully."));
    assert!(output.contains("Student with ID 9 not found."));
    assert!(output.contains("=== All Student Records (Sorted by ID) ===\nID: 2"));
    assert_eq!(fixture.registry.len(), 1);
}

#[test]
fn test_save_and_load_files() {
    let mut fixture = setup();
    fixture
        .registry
        .add(Student::new(1, "Ada", vec![90.0], 80.0).unwrap())
        .unwrap();
    let export = fixture._temp.path().join("export.db");
    let export = export.display();
    let script = format!(
        "{}6\n{}\n2\n1\n7\n{}\n7\n\n8\n3\n",
        FACULTY_LOGIN, export, export
    );

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Saved 1 student record(s) to"));
    assert!(output.contains("Loaded 1 student record(s) from"));
    assert!(output.contains("Error: a filename is required."));
    assert!(fixture.registry.get(1).is_some());
}

#[test]
fn test_load_missing_file_is_reported() {
    let mut fixture = setup();
    let script = format!("{}7\n/definitely/not/here.db\n8\n3\n", FACULTY_LOGIN);

    let output = run_session(&mut fixture, &script);

    assert!(output.contains("Error: IO error"));
}

#[test]
fn test_eof_inside_insert_ends_session() {
    let mut fixture = setup();
    let script = format!("{}1\n4\nAda\n", FACULTY_LOGIN);

    run_session(&mut fixture, &script);

    assert!(fixture.registry.is_empty());
}

// =============================================================================
// Student Dashboard Tests
// =============================================================================

#[test]
fn test_student_views_profile() {
    let mut fixture = setup();
    fixture
        .registry
        .add(Student::new(12, "Kim", vec![70.0, 74.0], 60.0).unwrap())
        .unwrap();

    let output = run_session(&mut fixture, "2\nstudent\nkim\npw\n1\n12\n1\n13\n2\n3\n");

    assert!(output.contains("=== Student Dashboard ==="));
    assert!(output.contains("ID: 12\nName: Kim\nMarks: 70 74\nCGPA: 7.20"));
    assert!(output.contains("Fee Slab: No slab assigned\nEligible: No"));
    assert!(output.contains("Student with ID 13 not found."));
    assert!(!output.contains("Faculty Dashboard"));
}
