use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_resolve_joins_base_and_strips_dot() {
    let resolved = resolve_target(Path::new("/repo"));
    assert_eq!(
        resolved,
        PathBuf::from("/repo/public/data/student_grades.csv")
    );
    // No `.` segment survives into the reported path
    assert!(!resolved.to_string_lossy().contains("/./"));
}

#[test]
fn test_resolve_is_lexical() {
    // The base does not need to exist: resolution never stats the filesystem
    let resolved = resolve_target(Path::new("/definitely/not/a/real/dir"));
    assert_eq!(
        resolved,
        PathBuf::from("/definitely/not/a/real/dir/public/data/student_grades.csv")
    );
}

#[test]
fn test_normalize_folds_parent_components() {
    assert_eq!(
        normalize(Path::new("/repo/sub/../public/./data")),
        PathBuf::from("/repo/public/data")
    );
    // `..` above an absolute root is dropped, not preserved
    assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
}

#[test]
fn test_check_reports_missing_for_absent_entry() {
    let temp = TempDir::new().unwrap();
    let resolved = resolve_target(temp.path());
    assert_eq!(check(&resolved), CheckOutcome::Missing);
}

#[test]
fn test_check_reports_found_for_regular_file() {
    let temp = TempDir::new().unwrap();
    let resolved = resolve_target(temp.path());
    fs::create_dir_all(resolved.parent().unwrap()).unwrap();
    fs::write(&resolved, "name,grade\nada,97\n").unwrap();

    assert_eq!(check(&resolved), CheckOutcome::Found);
}

#[test]
fn test_check_reports_found_for_directory_at_target() {
    // Existence only: a directory sitting at the target path still counts
    // as found, even though it is not a readable CSV.
    let temp = TempDir::new().unwrap();
    let resolved = resolve_target(temp.path());
    fs::create_dir_all(&resolved).unwrap();

    assert_eq!(check(&resolved), CheckOutcome::Found);
}

#[test]
fn test_report_templates_are_exact() {
    let path = Path::new("/repo/public/data/student_grades.csv");
    assert_eq!(
        report(CheckOutcome::Found, path),
        "Found file: /repo/public/data/student_grades.csv"
    );
    assert_eq!(
        report(CheckOutcome::Missing, path),
        "File not found at: /repo/public/data/student_grades.csv"
    );
}
